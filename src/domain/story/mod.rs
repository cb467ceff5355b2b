pub mod service;

pub use service::{StoryOutcome, StoryScene, StoryService};
