use super::model::HistoryEntry;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::HistoryRepository;
use crate::infrastructure::storage::{AudioStore, StorageError};
use std::sync::Arc;
use uuid::Uuid;

/// Read/playback/delete surface over persisted history and stored audio
pub struct HistoryService {
    history_repo: Arc<dyn HistoryRepository>,
    audio_store: Arc<dyn AudioStore>,
}

impl HistoryService {
    pub fn new(history_repo: Arc<dyn HistoryRepository>, audio_store: Arc<dyn AudioStore>) -> Self {
        Self {
            history_repo,
            audio_store,
        }
    }

    /// List entries for the resolved caller; anonymous callers see the
    /// anonymous namespace.
    pub async fn list_entries(&self, caller: Option<Uuid>) -> AppResult<Vec<HistoryEntry>> {
        self.history_repo.list(caller).await
    }

    /// Fetch the primary chunk audio for an entry
    pub async fn get_audio(&self, id: Uuid) -> AppResult<Vec<u8>> {
        let entry = self
            .history_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("history entry {}", id)))?;

        self.audio_store
            .retrieve(&entry.file_path)
            .await
            .map_err(|e| match e {
                StorageError::NotFound(key) => AppError::NotFound(format!("audio object {}", key)),
                StorageError::Backend(msg) => AppError::ExternalService(msg),
            })
    }

    /// Delete an entry. The storage delete is best-effort (a dangling
    /// object is preferable to a row that can never be removed); the row
    /// delete is the operation that must succeed.
    pub async fn delete_entry(&self, id: Uuid) -> AppResult<()> {
        let entry = self
            .history_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("history entry {}", id)))?;

        if let Err(err) = self.audio_store.delete(&entry.file_path).await {
            tracing::warn!(
                error = %err,
                file_path = %entry.file_path,
                "Failed to delete audio object from storage"
            );
        }

        self.history_repo.delete(id).await
    }
}
