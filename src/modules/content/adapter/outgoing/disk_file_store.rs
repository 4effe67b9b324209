use async_trait::async_trait;
use rand::Rng;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::content::application::domain::entities::ContentKind;
use crate::content::application::ports::outgoing::{FileStore, FileStoreError};

/// Local-disk storage. Paths handed back to callers are relative to
/// the base directory, e.g. `content/pdf/algebra-1a2b3c4d.pdf`.
#[derive(Clone)]
pub struct DiskFileStore {
    base_dir: PathBuf,
}

impl DiskFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn validate_extension(extension: &str) -> Result<(), FileStoreError> {
        let ok = !extension.is_empty()
            && extension.len() <= 10
            && extension.chars().all(|c| c.is_ascii_alphanumeric());
        if ok {
            Ok(())
        } else {
            Err(FileStoreError::InvalidName)
        }
    }

    async fn write_under(
        &self,
        prefix: &str,
        slug: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError> {
        Self::validate_extension(extension)?;

        let suffix: u32 = rand::thread_rng().gen();
        let relative = format!(
            "{}/{}-{:08x}.{}",
            prefix,
            slug,
            suffix,
            extension.to_ascii_lowercase()
        );

        let full = self.base_dir.join(&relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| FileStoreError::StorageError(e.to_string()))?;
        }

        fs::write(&full, bytes)
            .await
            .map_err(|e| FileStoreError::StorageError(e.to_string()))?;

        debug!(path = %relative, size = bytes.len(), "Stored uploaded file");
        Ok(relative)
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn store(
        &self,
        kind: ContentKind,
        slug: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError> {
        let prefix = format!("content/{}", kind.as_str());
        self.write_under(&prefix, slug, extension, bytes).await
    }

    async fn store_cover(
        &self,
        slug: &str,
        extension: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError> {
        self.write_under("content/covers", slug, extension, bytes)
            .await
    }

    async fn remove(&self, path: &str) -> Result<(), FileStoreError> {
        // Relative paths only; anything trying to climb out of the base
        // directory is rejected.
        let candidate = Path::new(path);
        if candidate.is_absolute()
            || candidate
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(FileStoreError::InvalidName);
        }

        match fs::remove_file(self.base_dir.join(candidate)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FileStoreError::StorageError(e.to_string())),
        }
    }
}
