//! API Module
//!
//! HTTP handlers and routing for the caching proxy.
//!
//! # Endpoints
//! - `GET /` - Welcome message
//! - `GET /health` - Health check endpoint
//! - `GET /films` - All films
//! - `GET /films/:film_id/characters` - Characters of a film
//! - `GET /films/:film_id/starships` - Starships of a film
//! - `GET /cache/stats` - Cache diagnostics
//! - `DELETE /cache` - Clear the cache

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
