use async_trait::async_trait;
use thiserror::Error;

use crate::content::application::domain::entities::ContentItem;
use crate::content::application::ports::outgoing::ContentQuery;

#[derive(Debug, Error)]
pub enum ListContentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContentItem>, ListContentError>;
}

pub struct ListContentUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListContentUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListContentUseCase for ListContentUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContentItem>, ListContentError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListContentError::RepositoryError(e.to_string()))
    }
}
