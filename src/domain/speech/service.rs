use super::catalog::resolve_voice_name;
use super::chunker::{chunk_text, MAX_CHUNK_CHARS};
use super::dto::{ChunkPayload, SynthesisOutcome, SynthesizeRequest};
use super::error::SpeechServiceError;
use crate::domain::history::model::NewHistoryEntry;
use crate::infrastructure::repositories::HistoryRepository;
use crate::infrastructure::storage::AudioStore;
use crate::infrastructure::synthesis::SynthesisBackend;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Namespace used for storage keys when no caller identity resolves
pub const ANONYMOUS_NAMESPACE: &str = "anonymous";

/// Orchestrates one synthesis request: validate, chunk, run each chunk
/// sequentially through the synthesis backend and the audio store, then
/// record the aggregate as a single history row.
pub struct SpeechService {
    synthesis: Arc<dyn SynthesisBackend>,
    audio_store: Arc<dyn AudioStore>,
    history_repo: Arc<dyn HistoryRepository>,
}

impl SpeechService {
    pub fn new(
        synthesis: Arc<dyn SynthesisBackend>,
        audio_store: Arc<dyn AudioStore>,
        history_repo: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            synthesis,
            audio_store,
            history_repo,
        }
    }

    pub async fn synthesize(
        &self,
        caller: Option<Uuid>,
        request: SynthesizeRequest,
    ) -> Result<SynthesisOutcome, SpeechServiceError> {
        // 1. Validate before making any external call
        if request.text.trim().is_empty() {
            return Err(SpeechServiceError::Invalid("Text is required".to_string()));
        }
        if request.voice_id.trim().is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Voice id is required".to_string(),
            ));
        }

        tracing::info!(
            caller = ?caller,
            text_length = request.text.len(),
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            "Speech synthesis request"
        );

        // 2. Split into chunks at sentence boundaries
        let chunks = chunk_text(&request.text, MAX_CHUNK_CHARS);
        tracing::info!(
            chunk_count = chunks.len(),
            text_length = request.text.len(),
            "Text split into chunks"
        );

        // 3. Synthesize and store each chunk, strictly in order. The first
        //    failure aborts the loop; chunks already stored stay stored.
        let namespace = caller
            .map(|id| id.to_string())
            .unwrap_or_else(|| ANONYMOUS_NAMESPACE.to_string());
        let key_base = storage_key_base();

        let mut results: Vec<ChunkPayload> = Vec::with_capacity(chunks.len());
        let mut total_bytes: usize = 0;

        for (index, chunk) in chunks.iter().enumerate() {
            tracing::info!(
                chunk_index = index,
                chunk_size = chunk.len(),
                "Synthesizing chunk"
            );

            let audio = self
                .synthesis
                .synthesize(
                    chunk,
                    &request.voice_id,
                    &request.model_id,
                    &request.voice_settings,
                )
                .await?;

            let key = format!("{}/{}-chunk-{}.mp3", namespace, key_base, index);
            let size = audio.len();
            let audio_data = STANDARD.encode(&audio);

            // Raw bytes move into storage here; only the encoded response
            // payload is retained
            self.audio_store.store(&key, audio).await?;

            total_bytes += size;
            results.push(ChunkPayload {
                index,
                audio_data,
                file_path: key,
                size,
                text_length: chunk.len(),
            });

            tracing::info!(
                chunk_index = index,
                chunk_audio_size = size,
                total_audio_size = total_bytes,
                "Chunk synthesized and stored"
            );
        }

        // 4. Record the aggregate. Audio durability is the hard guarantee;
        //    the history index is best-effort, so a failed insert is logged
        //    and the request still succeeds.
        if let Some(first) = results.first() {
            let entry = NewHistoryEntry {
                user_id: caller,
                text_content: request.text.clone(),
                voice_id: request.voice_id.clone(),
                voice_name: resolve_voice_name(&request.voice_id).to_string(),
                model_id: request.model_id.clone(),
                file_path: first.file_path.clone(),
                file_size: total_bytes as i64,
            };

            match self.history_repo.insert(entry).await {
                Ok(id) => tracing::info!(history_id = %id, "History entry recorded"),
                Err(err) => tracing::warn!(
                    error = %err,
                    "Failed to record history entry; audio is already stored"
                ),
            }
        }

        Ok(SynthesisOutcome {
            chunks: results,
            content_type: "audio/mpeg",
        })
    }
}

/// Shared key prefix for one request: high-resolution timestamp plus a
/// short random token. Chunk position is appended per key.
fn storage_key_base() -> String {
    let millis = Utc::now().timestamp_millis();
    let token = Uuid::new_v4().simple().to_string();
    format!("{}-{}", millis, &token[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_base_shape() {
        let base = storage_key_base();
        let parts: Vec<&str> = base.splitn(2, '-').collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].parse::<i64>().is_ok(), "timestamp prefix: {}", base);
        assert_eq!(parts[1].len(), 8, "random token: {}", base);
    }

    #[test]
    fn test_storage_key_base_is_collision_resistant() {
        let a = storage_key_base();
        let b = storage_key_base();
        assert_ne!(a, b);
    }
}
