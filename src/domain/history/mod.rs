pub mod model;
pub mod service;

pub use model::{HistoryEntry, NewHistoryEntry};
pub use service::HistoryService;
