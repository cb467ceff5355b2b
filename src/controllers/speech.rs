use axum::{extract::State, Extension, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    domain::speech::{
        dto::{ChunkPayload, SynthesizeRequest},
        SpeechService,
    },
    error::{AppError, AppResult},
    infrastructure::auth::CallerIdentity,
};

/// Response for POST /api/speech
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    pub success: bool,
    pub chunks: Vec<ChunkPayload>,
    pub total_chunks: usize,
    pub content_type: String,
}

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/speech - Convert text to speech, chunking long input
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        Extension(caller): Extension<CallerIdentity>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<Json<SynthesizeResponse>> {
        let outcome = controller
            .speech_service
            .synthesize(caller.0, request)
            .await
            .map_err(AppError::from)?;

        Ok(Json(SynthesizeResponse {
            success: true,
            total_chunks: outcome.chunks.len(),
            chunks: outcome.chunks,
            content_type: outcome.content_type.to_string(),
        }))
    }
}
