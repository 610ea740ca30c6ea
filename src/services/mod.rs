pub mod assistant;
pub mod playlists;
pub mod quotes;

pub use assistant::AssistantClient;
pub use playlists::PlaylistCatalog;
pub use quotes::QuoteBook;
