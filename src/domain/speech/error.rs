use crate::error::AppError;
use crate::infrastructure::storage::StorageError;
use crate::infrastructure::synthesis::SynthesisError;

/// Fatal pipeline errors. History-record failures are deliberately absent:
/// they are logged and swallowed, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::Synthesis(e) if e.status == 429 => {
                AppError::RateLimitExceeded(e.to_string())
            }
            SpeechServiceError::Synthesis(e) => AppError::ExternalService(e.to_string()),
            SpeechServiceError::Storage(e) => AppError::ExternalService(e.to_string()),
        }
    }
}
