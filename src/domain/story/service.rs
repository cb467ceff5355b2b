use crate::domain::speech::dto::VoiceSettings;
use crate::error::{AppError, AppResult};
use crate::infrastructure::synthesis::SynthesisBackend;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, CreateImageRequestArgs, Image, ImageModel,
        ImageResponseFormat, ImageSize, ResponseFormat,
    },
    Client,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use std::sync::Arc;

const SCRIPT_MODEL: &str = "gpt-4o";
const NARRATION_VOICE_ID: &str = "nPczCjzI2devNBz1zQrb";
const NARRATION_MODEL_ID: &str = "eleven_multilingual_v2";

const SCRIPT_SYSTEM_PROMPT: &str = "You are a video scriptwriter. Break the given story \
into 3-5 short scenes with visual descriptions for video generation. Each scene should be \
1-2 sentences with a vivid visual description. Return as JSON object with a \"scenes\" \
array of objects containing \"text\" and \"imagePrompt\" fields.";

/// Turns a story into narrated scenes: a scripted scene breakdown, one
/// generated image per scene, and a single narration track.
pub struct StoryService {
    openai: Arc<Client<OpenAIConfig>>,
    synthesis: Arc<dyn SynthesisBackend>,
}

#[derive(Debug, Clone)]
pub struct StoryScene {
    pub scene: String,
    /// Base64-encoded image
    pub image_data: String,
}

#[derive(Debug, Clone)]
pub struct StoryOutcome {
    pub scenes: Vec<StoryScene>,
    /// Base64-encoded MP3 narration of the full story
    pub audio: String,
}

#[derive(Debug, Deserialize)]
struct SceneScript {
    scenes: Vec<Scene>,
}

#[derive(Debug, Deserialize)]
struct Scene {
    text: String,
    #[serde(rename = "imagePrompt")]
    image_prompt: String,
}

impl StoryService {
    pub fn new(openai: Arc<Client<OpenAIConfig>>, synthesis: Arc<dyn SynthesisBackend>) -> Self {
        Self { openai, synthesis }
    }

    pub async fn generate(&self, text: &str, style: &str) -> AppResult<StoryOutcome> {
        if text.trim().is_empty() {
            return Err(AppError::BadRequest("Text is required".to_string()));
        }

        tracing::info!(text_length = text.len(), style = style, "Generating story scenes");

        // 1. Scene breakdown
        let script = self.generate_script(text).await?;
        tracing::info!(scene_count = script.scenes.len(), "Script generated");

        // 2. One image per scene, in order
        let mut scenes = Vec::with_capacity(script.scenes.len());
        for scene in &script.scenes {
            let image_data = self.generate_image(&scene.image_prompt, style).await?;
            scenes.push(StoryScene {
                scene: scene.text.clone(),
                image_data,
            });
        }
        tracing::info!(scene_count = scenes.len(), "Scene images generated");

        // 3. Narration for the full story
        let narration_settings = VoiceSettings::default();
        let audio = self
            .synthesis
            .synthesize(text, NARRATION_VOICE_ID, NARRATION_MODEL_ID, &narration_settings)
            .await
            .map_err(|e| AppError::ExternalService(e.to_string()))?;

        tracing::info!(audio_size = audio.len(), "Narration generated");

        Ok(StoryOutcome {
            scenes,
            audio: STANDARD.encode(&audio),
        })
    }

    async fn generate_script(&self, text: &str) -> AppResult<SceneScript> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(SCRIPT_MODEL)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SCRIPT_SYSTEM_PROMPT)
                    .build()
                    .map_err(|e| AppError::Internal(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(format!("Create scenes for this story: {}", text))
                    .build()
                    .map_err(|e| AppError::Internal(e.to_string()))?
                    .into(),
            ])
            .response_format(ResponseFormat::JsonObject)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = self
            .openai
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::ExternalService(format!("script generation failed: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::ExternalService("empty script response".to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::ExternalService(format!("invalid script response: {}", e)))
    }

    async fn generate_image(&self, prompt: &str, style: &str) -> AppResult<String> {
        let request = CreateImageRequestArgs::default()
            .model(ImageModel::DallE3)
            .prompt(format!("{}, {} style, high quality, detailed", prompt, style))
            .n(1)
            .response_format(ImageResponseFormat::B64Json)
            .size(ImageSize::S1792x1024)
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let response = self
            .openai
            .images()
            .create(request)
            .await
            .map_err(|e| AppError::ExternalService(format!("image generation failed: {}", e)))?;

        match response.data.first().map(|image| image.as_ref()) {
            Some(Image::B64Json { b64_json, .. }) => Ok(b64_json.as_ref().clone()),
            _ => Err(AppError::ExternalService(
                "image response missing b64 payload".to_string(),
            )),
        }
    }
}
