// Modules
pub mod ai;
pub mod catalog;
pub mod db;
pub mod listing;
pub mod mood;
pub mod playlist;

pub use ai::OpenAiClient;
pub use catalog::CatalogClient;
pub use db::{Database, SavedPlaylist};
pub use listing::{extract_tracks, TrackRecord};
pub use mood::{resolve, GenreQuery};
pub use playlist::Playlist;
