use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::history::{HistoryEntry, HistoryService},
    error::AppResult,
    infrastructure::auth::CallerIdentity,
};

pub struct HistoryController {
    history_service: Arc<HistoryService>,
}

impl HistoryController {
    pub fn new(history_service: Arc<HistoryService>) -> Self {
        Self { history_service }
    }

    /// GET /api/history - List generated audio for the caller
    pub async fn list(
        State(controller): State<Arc<HistoryController>>,
        Extension(caller): Extension<CallerIdentity>,
    ) -> AppResult<Json<Vec<HistoryEntry>>> {
        let entries = controller.history_service.list_entries(caller.0).await?;
        Ok(Json(entries))
    }

    /// GET /api/history/:id/audio - Download the stored audio for an entry
    pub async fn get_audio(
        State(controller): State<Arc<HistoryController>>,
        Path(id): Path<Uuid>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio = controller.history_service.get_audio(id).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());

        Ok((StatusCode::OK, headers, Body::from(audio)))
    }

    /// DELETE /api/history/:id - Remove an entry and its stored audio
    pub async fn delete(
        State(controller): State<Arc<HistoryController>>,
        Path(id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.history_service.delete_entry(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
