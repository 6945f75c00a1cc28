//! Storage backend abstraction
//!
//! Defines the StorageBackend trait the snapshot layer writes through.
//! The collection is persisted as a single document, so the trait only
//! covers flat file operations:
//! - MemoryStorageBackend: process-wide map (default)
//! - FileSystemStorageBackend: native file system (behind `native-fs`)

use async_trait::async_trait;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

/// Trait for storage backends
#[async_trait(?Send)]
pub trait StorageBackend: Send + Sync {
    /// Read a file from storage
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Write a file to storage
    async fn write_file(&self, path: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Check if a file exists
    async fn file_exists(&self, path: &str) -> Result<bool, StorageError>;
}

pub mod memory;

#[cfg(feature = "native-fs")]
pub mod filesystem;
