pub mod ad_query_postgres;
pub mod ad_repository_postgres;
pub mod conversions;
pub mod sea_orm_entity;
