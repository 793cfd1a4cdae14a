//! Data models for the caching proxy
//!
//! Raw upstream documents, the flattened summaries served to clients, and
//! the HTTP response bodies wrapping them.

pub mod responses;
pub mod summaries;
pub mod swapi;

// Re-export commonly used types
pub use responses::{
    ClearCacheResponse, ErrorResponse, FilmChildrenResponse, FilmListResponse, HealthResponse,
    RootResponse,
};
pub use summaries::{Character, Film, Starship};
pub use swapi::{FilmCollection, RawCharacter, RawFilm, RawStarship};
