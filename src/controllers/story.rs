use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{domain::story::StoryService, error::AppResult};

/// Request for POST /api/story
#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub text: String,
    #[serde(default = "default_style")]
    pub style: String,
}

fn default_style() -> String {
    "cinematic".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryResponse {
    pub success: bool,
    pub scenes: Vec<SceneResponse>,
    pub audio: String,
    pub total_scenes: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneResponse {
    pub scene: String,
    pub image_data: String,
}

pub struct StoryController {
    story_service: Arc<StoryService>,
}

impl StoryController {
    pub fn new(story_service: Arc<StoryService>) -> Self {
        Self { story_service }
    }

    /// POST /api/story - Generate narrated scenes for a story
    pub async fn generate(
        State(controller): State<Arc<StoryController>>,
        Json(request): Json<StoryRequest>,
    ) -> AppResult<Json<StoryResponse>> {
        let outcome = controller
            .story_service
            .generate(&request.text, &request.style)
            .await?;

        let scenes: Vec<SceneResponse> = outcome
            .scenes
            .into_iter()
            .map(|s| SceneResponse {
                scene: s.scene,
                image_data: s.image_data,
            })
            .collect();

        Ok(Json(StoryResponse {
            success: true,
            total_scenes: scenes.len(),
            scenes,
            audio: outcome.audio,
        }))
    }
}
