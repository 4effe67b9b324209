use async_trait::async_trait;
use thiserror::Error;

use crate::content::application::domain::entities::ContentItem;
use crate::content::application::ports::outgoing::{ContentQuery, ContentRepository};

#[derive(Debug, Error)]
pub enum DownloadContentError {
    #[error("Content not found")]
    ContentNotFound,
    #[error("This resource has no downloadable file")]
    NotDownloadable,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Fetch by slug, check a file exists, bump the download counter.
#[async_trait]
pub trait IDownloadContentUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ContentItem, DownloadContentError>;
}

pub struct DownloadContentUseCase<Q, R>
where
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DownloadContentUseCase<Q, R>
where
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IDownloadContentUseCase for DownloadContentUseCase<Q, R>
where
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ContentItem, DownloadContentError> {
        let item = self
            .query
            .find_by_slug(slug)
            .await
            .map_err(|e| DownloadContentError::RepositoryError(e.to_string()))?
            .ok_or(DownloadContentError::ContentNotFound)?;

        // YouTube items have a link, not a file.
        if !item.is_downloadable() {
            return Err(DownloadContentError::NotDownloadable);
        }

        self.repository
            .increment_downloads(item.id)
            .await
            .map_err(|e| DownloadContentError::RepositoryError(e.to_string()))
    }
}
