pub mod assistant;
pub mod playlist;

pub use assistant::{max_tokens_for, AssistantRequest, AssistantResponse};
pub use playlist::{Genre, Language, Mood, PlaylistEntry, PlaylistRequest, PlaylistSuggestion};
