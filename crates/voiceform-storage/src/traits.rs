//! Storage abstraction trait

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Handlers work against this trait rather than a concrete backend.
/// Writes must be durably flushed before `store` returns: a caller that
/// goes on to reference the file (e.g. as a mail attachment) may rely on
/// the bytes being on disk.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist `data` under `filename` and return (storage_key, absolute path).
    ///
    /// The key is the identifier for later `read`/`exists`/`delete` calls;
    /// the path is where the bytes landed on disk.
    async fn store(&self, filename: &str, data: Vec<u8>) -> StorageResult<(String, PathBuf)>;

    /// Read a stored file's bytes by its storage key.
    async fn read(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Check if a file exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Delete a file by its storage key. Deleting a missing key is not an
    /// error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;
}
