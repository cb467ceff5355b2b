use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One durable row in `audio_history`, representing an entire (possibly
/// multi-chunk) synthesis request.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub text_content: String,
    pub voice_id: String,
    pub voice_name: String,
    pub model_id: String,
    /// Storage key of chunk 0
    pub file_path: String,
    /// Total bytes across all stored chunks
    pub file_size: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the pipeline when recording a request
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub user_id: Option<Uuid>,
    pub text_content: String,
    pub voice_id: String,
    pub voice_name: String,
    pub model_id: String,
    pub file_path: String,
    pub file_size: i64,
}
