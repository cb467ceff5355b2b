use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{domain::translation::TranslationService, error::AppResult};

/// Request for POST /api/translate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
    pub source_language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    pub detected_language: Option<String>,
    pub original_text: String,
}

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate text ahead of synthesis
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        let result = controller
            .translation_service
            .translate(
                &request.text,
                &request.target_language,
                request.source_language.as_deref(),
            )
            .await?;

        Ok(Json(TranslateResponse {
            translated_text: result.translated_text,
            detected_language: result.detected_language,
            original_text: request.text,
        }))
    }
}
