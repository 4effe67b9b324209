use async_trait::async_trait;
use thiserror::Error;

use crate::content::application::domain::entities::ContentItem;
use crate::content::application::ports::outgoing::ContentQuery;

#[derive(Debug, Error)]
pub enum SearchContentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISearchContentUseCase: Send + Sync {
    async fn execute(&self, term: &str) -> Result<Vec<ContentItem>, SearchContentError>;
}

pub struct SearchContentUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SearchContentUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ISearchContentUseCase for SearchContentUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self, term: &str) -> Result<Vec<ContentItem>, SearchContentError> {
        let term = term.trim();

        // Blank query degrades to the plain listing.
        let result = if term.is_empty() {
            self.query.list_all().await
        } else {
            self.query.search(term).await
        };

        result.map_err(|e| SearchContentError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::ports::outgoing::ContentQueryError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use uuid::Uuid;

    #[derive(Default)]
    struct SpyQuery {
        listed: AtomicBool,
        searched: AtomicBool,
    }

    #[async_trait]
    impl ContentQuery for SpyQuery {
        async fn list_all(&self) -> Result<Vec<ContentItem>, ContentQueryError> {
            self.listed.store(true, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn search(&self, _: &str) -> Result<Vec<ContentItem>, ContentQueryError> {
            self.searched.store(true, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn find_by_id(&self, _: Uuid) -> Result<Option<ContentItem>, ContentQueryError> {
            Ok(None)
        }

        async fn find_by_slug(&self, _: &str) -> Result<Option<ContentItem>, ContentQueryError> {
            Ok(None)
        }

        async fn slug_exists(&self, _: &str) -> Result<bool, ContentQueryError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn blank_query_lists_everything() {
        let uc = SearchContentUseCase::new(SpyQuery::default());
        uc.execute("   ").await.unwrap();
        assert!(uc.query.listed.load(Ordering::SeqCst));
        assert!(!uc.query.searched.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn non_blank_query_searches() {
        let uc = SearchContentUseCase::new(SpyQuery::default());
        uc.execute("algebra").await.unwrap();
        assert!(uc.query.searched.load(Ordering::SeqCst));
    }
}
