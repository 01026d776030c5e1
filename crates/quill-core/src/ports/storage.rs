//! File storage port - the uploads directory behind a trait.

use async_trait::async_trait;

/// Attachment storage. Implementations own the naming scheme; callers get
/// back the stored filename and refer to files by it afterwards.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist an uploaded file, returning the stored filename.
    async fn store(&self, original_name: &str, data: &[u8]) -> Result<String, StorageError>;

    /// Read a stored file's bytes. `None` when the file is absent.
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Remove a stored file. Removing an absent file is not an error.
    async fn remove(&self, name: &str) -> Result<(), StorageError>;

    /// Whether a stored file exists.
    async fn exists(&self, name: &str) -> bool;
}

/// Storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}
