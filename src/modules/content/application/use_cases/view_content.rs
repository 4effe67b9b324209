use async_trait::async_trait;
use thiserror::Error;

use crate::content::application::domain::entities::ContentItem;
use crate::content::application::ports::outgoing::{ContentQuery, ContentRepository};

#[derive(Debug, Error)]
pub enum ViewContentError {
    #[error("Content not found")]
    ContentNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Fetch by slug and bump the view counter in one go.
#[async_trait]
pub trait IViewContentUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<ContentItem, ViewContentError>;
}

pub struct ViewContentUseCase<Q, R>
where
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> ViewContentUseCase<Q, R>
where
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IViewContentUseCase for ViewContentUseCase<Q, R>
where
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<ContentItem, ViewContentError> {
        let item = self
            .query
            .find_by_slug(slug)
            .await
            .map_err(|e| ViewContentError::RepositoryError(e.to_string()))?
            .ok_or(ViewContentError::ContentNotFound)?;

        self.repository
            .increment_views(item.id)
            .await
            .map_err(|e| ViewContentError::RepositoryError(e.to_string()))
    }
}
