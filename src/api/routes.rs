//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_cache_handler, film_characters_handler, film_starships_handler,
    films_handler, health_handler, not_found_handler, root_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Welcome message
/// - `GET /health` - Health check including cache status
/// - `GET /films` - All films, ascending by episode
/// - `GET /films/:film_id/characters` - Characters of a film, ascending by name
/// - `GET /films/:film_id/starships` - Starships of a film, ascending by name
/// - `GET /cache/stats` - Per-entry cache diagnostics
/// - `DELETE /cache` - Clear the cache
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/films", get(films_handler))
        .route("/films/:film_id/characters", get(film_characters_handler))
        .route("/films/:film_id/starships", get(film_starships_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
