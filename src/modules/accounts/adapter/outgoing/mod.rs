pub mod account_query_postgres;
pub mod account_repository_postgres;
pub mod conversions;
pub mod jwt;
pub mod profile_repository_postgres;
pub mod sea_orm_entity;
pub mod security;
