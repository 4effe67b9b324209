use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::ProfileRepository;
use crate::content::application::ports::outgoing::{
    ContentQuery, ContentRepository, ContentRepositoryError, FileStore,
};

#[derive(Debug, Error)]
pub enum DeleteContentError {
    #[error("Content not found")]
    ContentNotFound,
    #[error("Only the uploader or an operator may delete this")]
    NotAllowed,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteContentUseCase: Send + Sync {
    async fn execute(&self, caller_id: Uuid, content_id: Uuid) -> Result<(), DeleteContentError>;
}

pub struct DeleteContentUseCase<P, Q, R, F>
where
    P: ProfileRepository + Send + Sync,
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
    F: FileStore + Send + Sync,
{
    profiles: P,
    query: Q,
    repository: R,
    files: F,
}

impl<P, Q, R, F> DeleteContentUseCase<P, Q, R, F>
where
    P: ProfileRepository + Send + Sync,
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
    F: FileStore + Send + Sync,
{
    pub fn new(profiles: P, query: Q, repository: R, files: F) -> Self {
        Self {
            profiles,
            query,
            repository,
            files,
        }
    }
}

#[async_trait]
impl<P, Q, R, F> IDeleteContentUseCase for DeleteContentUseCase<P, Q, R, F>
where
    P: ProfileRepository + Send + Sync,
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
    F: FileStore + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid, content_id: Uuid) -> Result<(), DeleteContentError> {
        let item = self
            .query
            .find_by_id(content_id)
            .await
            .map_err(|e| DeleteContentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteContentError::ContentNotFound)?;

        if item.uploaded_by != caller_id {
            let caller_is_admin = self
                .profiles
                .find_by_account_id(caller_id)
                .await
                .map_err(|e| DeleteContentError::RepositoryError(e.to_string()))?
                .map(|p| p.is_admin())
                .unwrap_or(false);

            if !caller_is_admin {
                return Err(DeleteContentError::NotAllowed);
            }
        }

        let stored_path = item.source.file_path().map(|p| p.to_string());

        self.repository
            .delete(content_id)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::ContentNotFound => DeleteContentError::ContentNotFound,
                other => DeleteContentError::RepositoryError(other.to_string()),
            })?;

        // Row first, file second. An orphaned file is recoverable; a
        // dangling row pointing at nothing is not.
        if let Some(path) = stored_path {
            if let Err(e) = self.files.remove(&path).await {
                warn!(path = %path, error = %e, "Stored file cleanup failed");
            }
        }

        info!(content_id = %content_id, caller = %caller_id, "Content deleted");
        Ok(())
    }
}
