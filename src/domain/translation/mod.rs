pub mod service;

pub use service::{TranslationResult, TranslationService};
