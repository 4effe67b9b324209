use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::ProfileRepository;
use crate::content::application::domain::entities::{
    extract_youtube_id, ContentItem, ContentKind, ContentSource,
};
use crate::content::application::domain::slug::{slug_candidate, slugify};
use crate::content::application::ports::outgoing::{
    ContentQuery, ContentRepository, ContentRepositoryError, FileStore, NewContentItem,
};

// Uniqueness probing gives up eventually rather than spinning on a
// pathological dataset.
const MAX_SLUG_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone)]
pub enum UploadPayload {
    YouTube {
        url: String,
    },
    File {
        kind: ContentKind,
        extension: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone)]
pub struct UploadContentInput {
    pub uploader_id: Uuid,
    pub title: String,
    pub description: String,
    pub payload: UploadPayload,
}

#[derive(Debug, Error)]
pub enum UploadContentError {
    #[error("Only verified teachers can upload resources")]
    NotVerifiedTeacher,
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("File storage failed: {0}")]
    StorageFailed(String),
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUploadContentUseCase: Send + Sync {
    async fn execute(&self, input: UploadContentInput) -> Result<ContentItem, UploadContentError>;
}

pub struct UploadContentUseCase<P, Q, R, F>
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

impl<P, Q, R, F> UploadContentUseCase<P, Q, R, F>
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

    /// The publish gate reads the profile row at call time, so operator
    /// verification applies to the very next request.
    async fn require_verified_teacher(&self, account_id: Uuid) -> Result<(), UploadContentError> {
        let profile = self
            .profiles
            .find_by_account_id(account_id)
            .await
            .map_err(|e| UploadContentError::RepositoryError(e.to_string()))?
            .ok_or(UploadContentError::NotVerifiedTeacher)?;

        if !profile.can_publish() {
            return Err(UploadContentError::NotVerifiedTeacher);
        }
        Ok(())
    }

    async fn unique_slug(&self, title: &str) -> Result<String, UploadContentError> {
        let base = slugify(title);
        for attempt in 0..MAX_SLUG_ATTEMPTS {
            let candidate = slug_candidate(&base, attempt);
            let taken = self
                .query
                .slug_exists(&candidate)
                .await
                .map_err(|e| UploadContentError::RepositoryError(e.to_string()))?;
            if !taken {
                return Ok(candidate);
            }
        }
        Err(UploadContentError::RepositoryError(
            "could not find a free slug".to_string(),
        ))
    }
}

#[async_trait]
impl<P, Q, R, F> IUploadContentUseCase for UploadContentUseCase<P, Q, R, F>
where
    P: ProfileRepository + Send + Sync,
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
    F: FileStore + Send + Sync,
{
    async fn execute(&self, input: UploadContentInput) -> Result<ContentItem, UploadContentError> {
        if input.title.trim().is_empty() {
            return Err(UploadContentError::InvalidInput("Title is required"));
        }

        self.require_verified_teacher(input.uploader_id).await?;

        let slug = self.unique_slug(&input.title).await?;

        let (kind, source) = match input.payload {
            UploadPayload::YouTube { url } => {
                if extract_youtube_id(&url).is_none() {
                    return Err(UploadContentError::InvalidInput(
                        "Not a recognizable YouTube link",
                    ));
                }
                (ContentKind::Youtube, ContentSource::YouTube { url })
            }
            UploadPayload::File {
                kind,
                extension,
                bytes,
            } => {
                if kind == ContentKind::Youtube {
                    return Err(UploadContentError::InvalidInput(
                        "YouTube items carry a link, not a file",
                    ));
                }
                if bytes.is_empty() {
                    return Err(UploadContentError::InvalidInput("File body is empty"));
                }
                let path = self
                    .files
                    .store(kind, &slug, &extension, &bytes)
                    .await
                    .map_err(|e| UploadContentError::StorageFailed(e.to_string()))?;
                (kind, ContentSource::File { path })
            }
        };

        let item = self
            .repository
            .insert(NewContentItem {
                title: input.title,
                slug,
                description: input.description,
                kind,
                source,
                cover_image_path: None,
                uploaded_by: input.uploader_id,
            })
            .await
            .map_err(|e| match e {
                // A losing race on the slug is rare enough to surface.
                ContentRepositoryError::SlugTaken => {
                    warn!("Slug raced by a concurrent upload");
                    UploadContentError::RepositoryError(e.to_string())
                }
                other => UploadContentError::RepositoryError(other.to_string()),
            })?;

        info!(
            content_id = %item.id,
            slug = %item.slug,
            kind = item.kind.as_str(),
            uploader = %item.uploaded_by,
            "Content uploaded"
        );
        Ok(item)
    }
}
