//! Resource Orchestrator
//!
//! Read-through caching around the upstream API. Each query derives a
//! [`FetchKey`], serves a cache hit unchanged, and otherwise fetches the
//! parent document, fans out over its child references concurrently,
//! flattens and sorts the results, then caches them with the default TTL.

use std::fmt;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

use crate::cache::{CacheHealth, CacheStats, SharedCache};
use crate::error::{AppError, Result, UpstreamError};
use crate::models::{Character, Film, FilmCollection, RawCharacter, RawFilm, RawStarship, Starship};
use crate::upstream::UpstreamClient;

// == Child Kind ==
/// Child collections reachable from a film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKind {
    Characters,
    Starships,
}

impl ChildKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildKind::Characters => "characters",
            ChildKind::Starships => "starships",
        }
    }

    /// Reference URLs of this kind listed on `film`.
    pub fn references<'a>(&self, film: &'a RawFilm) -> &'a [String] {
        match self {
            ChildKind::Characters => &film.characters,
            ChildKind::Starships => &film.starships,
        }
    }
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Fetch Key ==
/// Cache key for a query. Distinct queries never share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKey {
    AllFilms,
    FilmChildren { film_id: u32, kind: ChildKind },
}

impl fmt::Display for FetchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchKey::AllFilms => f.write_str("films_all"),
            FetchKey::FilmChildren { film_id, kind } => write!(f, "film_{}_{}", film_id, kind),
        }
    }
}

// == Child Summary ==
/// A summary record fetched through a film's reference list.
pub trait ChildSummary: Serialize + DeserializeOwned + Send + 'static {
    /// Upstream document this summary is flattened from
    type Raw: DeserializeOwned + Send;

    const KIND: ChildKind;

    fn from_raw(raw: Self::Raw) -> Self;

    /// Ordering key for results
    fn name(&self) -> &str;
}

impl ChildSummary for Character {
    type Raw = RawCharacter;
    const KIND: ChildKind = ChildKind::Characters;

    fn from_raw(raw: RawCharacter) -> Self {
        Character::from(raw)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ChildSummary for Starship {
    type Raw = RawStarship;
    const KIND: ChildKind = ChildKind::Starships;

    fn from_raw(raw: RawStarship) -> Self {
        Starship::from(raw)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses a caller-supplied film ID. Only positive integers are accepted.
pub fn parse_film_id(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(AppError::Validation(format!(
            "film_id must be a positive integer, got '{}'",
            raw
        ))),
        Ok(id) => Ok(id),
    }
}

// == Resource Orchestrator ==
/// Read-through cache in front of the upstream API.
#[derive(Debug, Clone)]
pub struct ResourceOrchestrator {
    cache: SharedCache,
    upstream: UpstreamClient,
}

impl ResourceOrchestrator {
    pub fn new(cache: SharedCache, upstream: UpstreamClient) -> Self {
        Self { cache, upstream }
    }

    /// The cache this orchestrator reads through.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == All Films ==
    /// All films, ascending by episode number.
    pub async fn get_all_films(&self) -> Result<Vec<Film>> {
        let key = FetchKey::AllFilms;
        if let Some(films) = self.cached::<Film>(&key).await? {
            info!("Retrieved films from cache");
            return Ok(films);
        }

        info!("Fetching films from upstream");
        let collection: FilmCollection = self.upstream.fetch_as("films/").await.map_err(|e| {
            error!("Failed to fetch films: {}", e);
            AppError::from(e)
        })?;

        let mut films: Vec<Film> = collection.results.into_iter().map(Film::from).collect();
        films.sort_by_key(|film| film.episode_id);

        self.store(&key, &films).await?;
        info!("Retrieved and cached {} films", films.len());
        Ok(films)
    }

    // == Film Children ==
    /// Children of one kind for a film, ascending by name.
    ///
    /// Any not-found while resolving the film or its references surfaces as
    /// "Film with ID {id} not found". A film without references of this kind
    /// yields an empty list, which is not cached.
    pub async fn get_children_for_film<T: ChildSummary>(&self, film_id: u32) -> Result<Vec<T>> {
        if film_id == 0 {
            return Err(AppError::Validation(
                "film_id must be a positive integer".to_string(),
            ));
        }

        let key = FetchKey::FilmChildren {
            film_id,
            kind: T::KIND,
        };
        if let Some(children) = self.cached::<T>(&key).await? {
            info!("Retrieved {} for film {} from cache", T::KIND, film_id);
            return Ok(children);
        }

        info!("Fetching {} for film {} from upstream", T::KIND, film_id);
        let children = match self.fetch_children::<T>(film_id).await {
            Ok(children) => children,
            Err(UpstreamError::NotFound(_)) => {
                return Err(AppError::NotFound(format!(
                    "Film with ID {} not found",
                    film_id
                )))
            }
            Err(e) => {
                error!("Failed to fetch {} for film {}: {}", T::KIND, film_id, e);
                return Err(e.into());
            }
        };

        if !children.is_empty() {
            self.store(&key, &children).await?;
        }
        info!(
            "Retrieved and cached {} {} for film {}",
            children.len(),
            T::KIND,
            film_id
        );
        Ok(children)
    }

    pub async fn get_film_characters(&self, film_id: u32) -> Result<Vec<Character>> {
        self.get_children_for_film::<Character>(film_id).await
    }

    pub async fn get_film_starships(&self, film_id: u32) -> Result<Vec<Starship>> {
        self.get_children_for_film::<Starship>(film_id).await
    }

    // == Cache Introspection ==
    pub async fn cache_health(&self) -> CacheHealth {
        self.cache.lock().await.health_check()
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }

    /// Drops every cached result, returning how many were removed.
    pub async fn clear_cache(&self) -> usize {
        self.cache.lock().await.clear()
    }

    /// Fetches the film, then every referenced child concurrently.
    ///
    /// The join is all-or-nothing: the first child to fail after its retries
    /// cancels the siblings still in flight and fails the batch.
    async fn fetch_children<T: ChildSummary>(
        &self,
        film_id: u32,
    ) -> std::result::Result<Vec<T>, UpstreamError> {
        let film: RawFilm = self.upstream.fetch_as(&format!("films/{}/", film_id)).await?;

        let references = T::KIND.references(&film);
        if references.is_empty() {
            return Ok(Vec::new());
        }

        let raws = try_join_all(
            references
                .iter()
                .map(|url| self.upstream.fetch_as::<T::Raw>(url)),
        )
        .await?;

        let mut children: Vec<T> = raws.into_iter().map(T::from_raw).collect();
        children.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(children)
    }

    async fn cached<T: DeserializeOwned>(&self, key: &FetchKey) -> Result<Option<Vec<T>>> {
        let hit = self.cache.lock().await.get(&key.to_string());
        hit.map(serde_json::from_value::<Vec<T>>)
            .transpose()
            .map_err(|e| AppError::Internal(format!("Corrupt cache entry {}: {}", key, e)))
    }

    async fn store<T: Serialize>(&self, key: &FetchKey, results: &[T]) -> Result<()> {
        let value = serde_json::to_value(results)
            .map_err(|e| AppError::Internal(format!("Failed to encode {}: {}", key, e)))?;
        self.cache.lock().await.set(key.to_string(), value, None);
        Ok(())
    }
}
