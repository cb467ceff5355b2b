use super::{SynthesisBackend, SynthesisError};
use crate::domain::speech::dto::VoiceSettings;
use async_trait::async_trait;
use serde::Serialize;

const ELEVENLABS_TTS_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

/// ElevenLabs implementation of the synthesis backend
pub struct ElevenLabsClient {
    http_client: reqwest::Client,
    api_key: String,
}

#[derive(Serialize)]
struct TtsRequestBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

impl ElevenLabsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl SynthesisBackend for ElevenLabsClient {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        model_id: &str,
        settings: &VoiceSettings,
    ) -> Result<Vec<u8>, SynthesisError> {
        tracing::info!(
            voice_id = voice_id,
            model_id = model_id,
            text_length = text.len(),
            text_preview = %text.chars().take(200).collect::<String>(),
            "Calling ElevenLabs text-to-speech"
        );

        let response = self
            .http_client
            .post(format!("{}/{}", ELEVENLABS_TTS_URL, voice_id))
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.api_key)
            .json(&TtsRequestBody {
                text,
                model_id,
                voice_settings: settings,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice_id = voice_id, "ElevenLabs request failed");
                // Transport failures carry no upstream status; report as 502
                SynthesisError {
                    status: 502,
                    message: format!("request failed: {}", e),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            tracing::error!(
                status = status.as_u16(),
                message = %message,
                voice_id = voice_id,
                "ElevenLabs returned an error"
            );
            return Err(SynthesisError {
                status: status.as_u16(),
                message,
            });
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError {
                status: 502,
                message: format!("failed to read audio body: {}", e),
            })?
            .to_vec();

        tracing::debug!(
            audio_size = audio_bytes.len(),
            "ElevenLabs audio received successfully"
        );

        Ok(audio_bytes)
    }
}
