use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::content::application::domain::entities::{ContentItem, ContentKind, ContentSource};

/// Everything needed to insert a content row. The slug is decided by
/// the use case before this struct is built.
#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub kind: ContentKind,
    pub source: ContentSource,
    pub cover_image_path: Option<String>,
    pub uploaded_by: Uuid,
}

#[async_trait]
pub trait ContentRepository {
    async fn insert(&self, item: NewContentItem) -> Result<ContentItem, ContentRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError>;

    /// Atomic `views_count + 1`; returns the updated row.
    async fn increment_views(&self, id: Uuid) -> Result<ContentItem, ContentRepositoryError>;

    /// Atomic `download_count + 1`; returns the updated row.
    async fn increment_downloads(&self, id: Uuid) -> Result<ContentItem, ContentRepositoryError>;

    /// Points the row at an already-stored cover image.
    async fn set_cover_image(
        &self,
        id: Uuid,
        path: String,
    ) -> Result<ContentItem, ContentRepositoryError>;
}

#[derive(Debug, Error)]
pub enum ContentRepositoryError {
    #[error("Content not found")]
    ContentNotFound,
    #[error("Slug already taken")]
    SlugTaken,
    #[error("Database error: {0}")]
    DatabaseError(String),
}
