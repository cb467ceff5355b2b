use super::{AudioStore, StorageError};
use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client as S3Client};
use std::sync::Arc;

/// S3-backed audio store. One bucket, keys namespaced by caller identity.
pub struct S3AudioStore {
    client: Arc<S3Client>,
    bucket: String,
}

impl S3AudioStore {
    pub fn new(client: Arc<S3Client>, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl AudioStore for S3AudioStore {
    async fn store(&self, key: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("audio/mpeg")
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, key = key, "S3 put_object failed");
                StorageError::Backend(format!("put {} failed: {}", key, e))
            })?;

        tracing::debug!(key = key, size = size, "Audio chunk stored");
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service_err = e.into_service_error();
                if service_err.is_no_such_key() {
                    StorageError::NotFound(key.to_string())
                } else {
                    tracing::error!(error = ?service_err, key = key, "S3 get_object failed");
                    StorageError::Backend(format!("get {} failed: {}", key, service_err))
                }
            })?;

        let data = output.body.collect().await.map_err(|e| {
            tracing::error!(error = %e, key = key, "Failed to collect S3 object body");
            StorageError::Backend(format!("read {} failed: {}", key, e))
        })?;

        Ok(data.into_bytes().to_vec())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, key = key, "S3 delete_object failed");
                StorageError::Backend(format!("delete {} failed: {}", key, e))
            })?;

        tracing::debug!(key = key, "Audio chunk deleted");
        Ok(())
    }
}
