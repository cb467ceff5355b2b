pub mod elevenlabs;

pub use elevenlabs::ElevenLabsClient;

use crate::domain::speech::dto::VoiceSettings;
use async_trait::async_trait;

/// Non-success response from the synthesis backend. Carries the upstream
/// HTTP status so callers can surface it verbatim.
#[derive(Debug, Clone, thiserror::Error)]
#[error("synthesis backend returned {status}: {message}")]
pub struct SynthesisError {
    pub status: u16,
    pub message: String,
}

/// Backend converting one chunk of text plus voice parameters into raw
/// audio bytes. Implementations make exactly one outbound call per
/// invocation; batching and retries belong to the caller.
#[async_trait]
pub trait SynthesisBackend: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        model_id: &str,
        settings: &VoiceSettings,
    ) -> Result<Vec<u8>, SynthesisError>;
}
