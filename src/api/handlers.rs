//! API Handlers
//!
//! Thin HTTP handlers delegating to the resource orchestrator.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{shared, CacheStats, CacheStore};
use crate::config::Config;
use crate::error::{AppError, Result, UpstreamError};
use crate::models::{
    Character, ClearCacheResponse, FilmChildrenResponse, FilmListResponse, HealthResponse,
    RootResponse, Starship,
};
use crate::orchestrator::{parse_film_id, ChildKind, ResourceOrchestrator};
use crate::upstream::UpstreamClient;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Read-through orchestrator owning the shared cache
    pub orchestrator: ResourceOrchestrator,
}

impl AppState {
    /// Creates a new AppState around an orchestrator.
    pub fn new(orchestrator: ResourceOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache with the configured default TTL and a reqwest-backed
    /// upstream client.
    pub fn from_config(config: &Config) -> std::result::Result<Self, UpstreamError> {
        let cache = shared(CacheStore::new(config.default_ttl));
        let upstream = UpstreamClient::from_config(config)?;
        Ok(Self::new(ResourceOrchestrator::new(cache, upstream)))
    }
}

/// Handler for GET /
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse::welcome())
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.orchestrator.cache_health().await;
    Json(HealthResponse::healthy(cache))
}

/// Handler for GET /films
pub async fn films_handler(State(state): State<AppState>) -> Result<Json<FilmListResponse>> {
    let films = state.orchestrator.get_all_films().await?;
    Ok(Json(FilmListResponse::new(films)))
}

/// Handler for GET /films/:film_id/characters
pub async fn film_characters_handler(
    State(state): State<AppState>,
    Path(film_id): Path<String>,
) -> Result<Json<FilmChildrenResponse<Character>>> {
    let film_id = parse_film_id(&film_id)?;
    let characters = state.orchestrator.get_film_characters(film_id).await?;

    Ok(Json(FilmChildrenResponse::new(
        film_id,
        ChildKind::Characters.as_str(),
        characters,
    )))
}

/// Handler for GET /films/:film_id/starships
pub async fn film_starships_handler(
    State(state): State<AppState>,
    Path(film_id): Path<String>,
) -> Result<Json<FilmChildrenResponse<Starship>>> {
    let film_id = parse_film_id(&film_id)?;
    let starships = state.orchestrator.get_film_starships(film_id).await?;

    Ok(Json(FilmChildrenResponse::new(
        film_id,
        ChildKind::Starships.as_str(),
        starships,
    )))
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.orchestrator.cache_stats().await)
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let removed = state.orchestrator.clear_cache().await;
    Json(ClearCacheResponse::new(removed))
}

/// Fallback for unknown routes
pub async fn not_found_handler() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
