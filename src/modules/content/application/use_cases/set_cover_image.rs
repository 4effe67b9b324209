use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::ProfileRepository;
use crate::content::application::domain::entities::ContentItem;
use crate::content::application::ports::outgoing::{
    ContentQuery, ContentRepository, ContentRepositoryError, FileStore,
};

#[derive(Debug, Clone)]
pub struct SetCoverImageInput {
    pub caller_id: Uuid,
    pub slug: String,
    pub extension: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum SetCoverImageError {
    #[error("Content not found")]
    ContentNotFound,
    #[error("Only the uploader or an operator may change the cover")]
    NotAllowed,
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("File storage failed: {0}")]
    StorageFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISetCoverImageUseCase: Send + Sync {
    async fn execute(&self, input: SetCoverImageInput)
        -> Result<ContentItem, SetCoverImageError>;
}

pub struct SetCoverImageUseCase<P, Q, R, F>
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

impl<P, Q, R, F> SetCoverImageUseCase<P, Q, R, F>
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
impl<P, Q, R, F> ISetCoverImageUseCase for SetCoverImageUseCase<P, Q, R, F>
where
    P: ProfileRepository + Send + Sync,
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
    F: FileStore + Send + Sync,
{
    async fn execute(
        &self,
        input: SetCoverImageInput,
    ) -> Result<ContentItem, SetCoverImageError> {
        if input.bytes.is_empty() {
            return Err(SetCoverImageError::InvalidInput("Image body is empty"));
        }

        let item = self
            .query
            .find_by_slug(&input.slug)
            .await
            .map_err(|e| SetCoverImageError::RepositoryError(e.to_string()))?
            .ok_or(SetCoverImageError::ContentNotFound)?;

        // Same gate as deletion: the uploader, or an operator.
        if item.uploaded_by != input.caller_id {
            let caller_is_admin = self
                .profiles
                .find_by_account_id(input.caller_id)
                .await
                .map_err(|e| SetCoverImageError::RepositoryError(e.to_string()))?
                .map(|p| p.is_admin())
                .unwrap_or(false);

            if !caller_is_admin {
                return Err(SetCoverImageError::NotAllowed);
            }
        }

        let path = self
            .files
            .store_cover(&item.slug, &input.extension, &input.bytes)
            .await
            .map_err(|e| SetCoverImageError::StorageFailed(e.to_string()))?;

        let previous_cover = item.cover_image_path.clone();

        let updated = self
            .repository
            .set_cover_image(item.id, path)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::ContentNotFound => SetCoverImageError::ContentNotFound,
                other => SetCoverImageError::RepositoryError(other.to_string()),
            })?;

        // The replaced cover is dead weight once the row points away
        // from it.
        if let Some(old) = previous_cover {
            if let Err(e) = self.files.remove(&old).await {
                warn!(path = %old, error = %e, "Replaced cover cleanup failed");
            }
        }

        info!(
            content_id = %updated.id,
            slug = %updated.slug,
            caller = %input.caller_id,
            "Cover image set"
        );
        Ok(updated)
    }
}
