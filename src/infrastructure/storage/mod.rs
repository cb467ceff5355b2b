pub mod s3;

pub use s3::S3AudioStore;

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    #[error("audio object not found: {0}")]
    NotFound(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Object store for chunk audio. Keys are derived by the caller
/// (`<namespace>/<millis>-<token>-chunk-<n>.mp3`); implementations treat
/// them as opaque.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn store(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError>;
    async fn retrieve(&self, key: &str) -> Result<Vec<u8>, StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
