pub mod health;
pub mod history;
pub mod speech;
pub mod story;
pub mod translate;

pub use history::HistoryController;
pub use speech::SpeechController;
pub use story::StoryController;
pub use translate::TranslateController;
