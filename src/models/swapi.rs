//! Raw upstream documents
//!
//! Only the fields the summaries need are declared. `url` and the ordering
//! key must be present; everything else falls back to an empty default.

use serde::Deserialize;

/// Collection envelope returned by `films/`.
#[derive(Debug, Clone, Deserialize)]
pub struct FilmCollection {
    #[serde(default)]
    pub results: Vec<RawFilm>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawFilm {
    pub episode_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCharacter {
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub homeworld: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStarship {
    pub name: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub cost_in_credits: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub max_atmosphering_speed: String,
    #[serde(default)]
    pub crew: String,
    #[serde(default)]
    pub passengers: String,
    #[serde(default)]
    pub cargo_capacity: String,
    #[serde(default)]
    pub consumables: String,
    #[serde(default)]
    pub hyperdrive_rating: String,
    #[serde(default, rename = "MGLT")]
    pub mglt: String,
    #[serde(default)]
    pub starship_class: String,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub edited: String,
}
