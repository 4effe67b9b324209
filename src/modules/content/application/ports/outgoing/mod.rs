pub mod content_query;
pub mod content_repository;
pub mod file_store;

pub use content_query::{ContentQuery, ContentQueryError};
pub use content_repository::{ContentRepository, ContentRepositoryError, NewContentItem};
pub use file_store::{FileStore, FileStoreError};
