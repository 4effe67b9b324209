use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::content::application::domain::entities::ContentItem;

#[async_trait]
pub trait ContentQuery {
    /// All items, newest first.
    async fn list_all(&self) -> Result<Vec<ContentItem>, ContentQueryError>;

    /// Case-insensitive substring match over title or description,
    /// newest first.
    async fn search(&self, term: &str) -> Result<Vec<ContentItem>, ContentQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentItem>, ContentQueryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ContentItem>, ContentQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, ContentQueryError>;
}

#[derive(Debug, Error)]
pub enum ContentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
