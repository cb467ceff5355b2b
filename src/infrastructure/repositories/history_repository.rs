use crate::domain::history::model::{HistoryEntry, NewHistoryEntry};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Persistence for history records. The pipeline treats `insert` as
/// best-effort bookkeeping; the read/delete side backs the history surface.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn insert(&self, entry: NewHistoryEntry) -> AppResult<Uuid>;
    async fn list(&self, user_id: Option<Uuid>) -> AppResult<Vec<HistoryEntry>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<HistoryEntry>>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct PgHistoryRepository {
    pool: Arc<DbPool>,
}

impl PgHistoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn insert(&self, entry: NewHistoryEntry) -> AppResult<Uuid> {
        let pool = self.pool.as_ref();
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO audio_history
                (id, user_id, text_content, voice_id, voice_name, model_id, file_path, file_size, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(id)
        .bind(entry.user_id)
        .bind(&entry.text_content)
        .bind(&entry.voice_id)
        .bind(&entry.voice_name)
        .bind(&entry.model_id)
        .bind(&entry.file_path)
        .bind(entry.file_size)
        .bind(now)
        .execute(pool)
        .await?;

        Ok(id)
    }

    async fn list(&self, user_id: Option<Uuid>) -> AppResult<Vec<HistoryEntry>> {
        let pool = self.pool.as_ref();

        let entries = match user_id {
            Some(user_id) => {
                sqlx::query_as::<_, HistoryEntry>(
                    r#"
                    SELECT id, user_id, text_content, voice_id, voice_name, model_id, file_path, file_size, created_at
                    FROM audio_history
                    WHERE user_id = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(user_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, HistoryEntry>(
                    r#"
                    SELECT id, user_id, text_content, voice_id, voice_name, model_id, file_path, file_size, created_at
                    FROM audio_history
                    WHERE user_id IS NULL
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
        };

        Ok(entries)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<HistoryEntry>> {
        let pool = self.pool.as_ref();

        let entry = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT id, user_id, text_content, voice_id, voice_name, model_id, file_path, file_size, created_at
            FROM audio_history
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(entry)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let pool = self.pool.as_ref();

        sqlx::query("DELETE FROM audio_history WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
