use serde::{Deserialize, Serialize};

use super::catalog::DEFAULT_MODEL_ID;

/// Request for POST /api/speech
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    pub voice_id: String,
    #[serde(default = "default_model_id")]
    pub model_id: String,
    #[serde(default)]
    pub voice_settings: VoiceSettings,
}

fn default_model_id() -> String {
    DEFAULT_MODEL_ID.to_string()
}

/// ElevenLabs voice tuning parameters, passed through verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

/// One synthesized and stored chunk, as returned to the caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkPayload {
    pub index: usize,
    /// Base64-encoded MP3 bytes
    pub audio_data: String,
    /// Storage key the chunk was persisted under
    pub file_path: String,
    /// Raw audio size in bytes
    pub size: usize,
    /// Length of the source text for this chunk
    pub text_length: usize,
}

/// Aggregate result of one synthesis request
#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    pub chunks: Vec<ChunkPayload>,
    pub content_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: SynthesizeRequest = serde_json::from_str(
            r#"{"text": "Hello", "voice_id": "nPczCjzI2devNBz1zQrb"}"#,
        )
        .unwrap();
        assert_eq!(request.model_id, "eleven_multilingual_v2");
        assert_eq!(request.voice_settings.stability, 0.5);
        assert_eq!(request.voice_settings.similarity_boost, 0.75);
        assert!(request.voice_settings.use_speaker_boost);
    }

    #[test]
    fn test_chunk_payload_serializes_camel_case() {
        let payload = ChunkPayload {
            index: 0,
            audio_data: "aGVsbG8=".to_string(),
            file_path: "anonymous/1712345-ab12cd34-chunk-0.mp3".to_string(),
            size: 5,
            text_length: 12,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("audioData").is_some());
        assert!(json.get("filePath").is_some());
        assert!(json.get("textLength").is_some());
        assert!(json.get("audio_data").is_none());
    }
}
