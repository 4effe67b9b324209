use async_trait::async_trait;
use thiserror::Error;

use crate::content::application::domain::entities::ContentKind;

/// Binary storage for uploaded resources. The store decides the final
/// path (`content/<kind>/<slug>-<rand>.<ext>`) and returns it for the
/// database row.
#[async_trait]
pub trait FileStore {
    async fn store(
        &self,
        kind: ContentKind,
        slug: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError>;

    /// Cover images live under their own prefix
    /// (`content/covers/<slug>-<rand>.<ext>`), separate from the
    /// resource files themselves.
    async fn store_cover(
        &self,
        slug: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError>;

    async fn remove(&self, path: &str) -> Result<(), FileStoreError>;
}

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("Invalid file name or extension")]
    InvalidName,
    #[error("Storage error: {0}")]
    StorageError(String),
}
