pub mod catalog;
pub mod chunker;
pub mod dto;
pub mod error;
pub mod service;

pub use chunker::{chunk_text, MAX_CHUNK_CHARS};
pub use service::{SpeechService, ANONYMOUS_NAMESPACE};
