pub mod content_query_postgres;
pub mod content_repository_postgres;
pub mod conversions;
pub mod disk_file_store;
pub mod sea_orm_entity;
