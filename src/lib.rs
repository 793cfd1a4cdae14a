//! SWAPI Cache - A read-through caching proxy for the Star Wars API
//!
//! Fetches films and fans out over their character and starship references
//! concurrently, serving flattened summaries from a TTL cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use orchestrator::{ChildKind, FetchKey, ResourceOrchestrator};
pub use tasks::spawn_cleanup_task;
