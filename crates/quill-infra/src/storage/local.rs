//! Local-disk attachment store.
//!
//! Files live flat in one uploads directory and are named by upload
//! timestamp (milliseconds) plus the original extension, so collisions are
//! only mitigated incidentally by the clock resolution.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;

use quill_core::ports::{FileStore, StorageError};

/// Attachment store over a local uploads directory.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Open the store, creating the uploads directory if needed.
    pub async fn init(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        tracing::info!(dir = %root.display(), "Uploads directory ready");

        Ok(Self { root })
    }

    /// Resolve a stored filename to its on-disk path. `None` for names
    /// that could escape the uploads directory.
    fn path_for(&self, name: &str) -> Option<PathBuf> {
        if !is_safe_name(name) {
            return None;
        }
        Some(self.root.join(name))
    }
}

/// Reject anything that is not a plain single-component filename.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, original_name: &str, data: &[u8]) -> Result<String, StorageError> {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let name = format!("{}{}", Utc::now().timestamp_millis(), ext);

        fs::write(self.root.join(&name), data).await?;
        tracing::debug!(file = %name, bytes = data.len(), "Stored attachment");

        Ok(name)
    }

    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let Some(path) = self.path_for(name) else {
            return Ok(None);
        };

        match fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, name: &str) -> Result<(), StorageError> {
        let Some(path) = self.path_for(name) else {
            return Ok(());
        };

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(file = %name, "Removed attachment");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, name: &str) -> bool {
        match self.path_for(name) {
            Some(path) => fs::try_exists(&path).await.unwrap_or(false),
            None => false,
        }
    }
}
