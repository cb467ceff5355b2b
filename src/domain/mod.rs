pub mod history;
pub mod speech;
pub mod story;
pub mod translation;
