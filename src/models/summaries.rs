//! Flattened summary records
//!
//! Scalar fields are copied verbatim; `*_count` fields are the lengths of the
//! matching reference lists on the upstream document.

use serde::{Deserialize, Serialize};

use crate::models::swapi::{RawCharacter, RawFilm, RawStarship};

/// Characters kept from the opening crawl before the ellipsis.
pub const OPENING_CRAWL_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub episode_id: i64,
    pub title: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    /// Truncated opening crawl, always ending in "..."
    pub opening_crawl: String,
    pub character_count: usize,
    pub starship_count: usize,
    pub planet_count: usize,
    pub vehicle_count: usize,
    pub species_count: usize,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl From<RawFilm> for Film {
    fn from(raw: RawFilm) -> Self {
        Self {
            episode_id: raw.episode_id,
            opening_crawl: truncate_crawl(&raw.opening_crawl),
            character_count: raw.characters.len(),
            starship_count: raw.starships.len(),
            planet_count: raw.planets.len(),
            vehicle_count: raw.vehicles.len(),
            species_count: raw.species.len(),
            title: raw.title,
            director: raw.director,
            producer: raw.producer,
            release_date: raw.release_date,
            url: raw.url,
            created: raw.created,
            edited: raw.edited,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld_url: String,
    pub film_count: usize,
    pub starship_count: usize,
    pub vehicle_count: usize,
    pub species_count: usize,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl From<RawCharacter> for Character {
    fn from(raw: RawCharacter) -> Self {
        Self {
            film_count: raw.films.len(),
            starship_count: raw.starships.len(),
            vehicle_count: raw.vehicles.len(),
            species_count: raw.species.len(),
            name: raw.name,
            height: raw.height,
            mass: raw.mass,
            hair_color: raw.hair_color,
            skin_color: raw.skin_color,
            eye_color: raw.eye_color,
            birth_year: raw.birth_year,
            gender: raw.gender,
            homeworld_url: raw.homeworld,
            url: raw.url,
            created: raw.created,
            edited: raw.edited,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub starship_class: String,
    pub pilot_count: usize,
    pub film_count: usize,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl From<RawStarship> for Starship {
    fn from(raw: RawStarship) -> Self {
        Self {
            pilot_count: raw.pilots.len(),
            film_count: raw.films.len(),
            name: raw.name,
            model: raw.model,
            manufacturer: raw.manufacturer,
            cost_in_credits: raw.cost_in_credits,
            length: raw.length,
            max_atmosphering_speed: raw.max_atmosphering_speed,
            crew: raw.crew,
            passengers: raw.passengers,
            cargo_capacity: raw.cargo_capacity,
            consumables: raw.consumables,
            hyperdrive_rating: raw.hyperdrive_rating,
            mglt: raw.mglt,
            starship_class: raw.starship_class,
            url: raw.url,
            created: raw.created,
            edited: raw.edited,
        }
    }
}

/// Keeps the first [`OPENING_CRAWL_LIMIT`] characters and appends "...".
pub fn truncate_crawl(crawl: &str) -> String {
    let mut truncated: String = crawl.chars().take(OPENING_CRAWL_LIMIT).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_crawl_long() {
        let crawl = "x".repeat(500);
        let truncated = truncate_crawl(&crawl);
        assert_eq!(truncated.len(), OPENING_CRAWL_LIMIT + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_crawl_short_still_gets_ellipsis() {
        assert_eq!(truncate_crawl("It is a period"), "It is a period...");
        assert_eq!(truncate_crawl(""), "...");
    }

    #[test]
    fn test_truncate_crawl_counts_characters_not_bytes() {
        let crawl = "é".repeat(250);
        let truncated = truncate_crawl(&crawl);
        assert_eq!(truncated.chars().count(), OPENING_CRAWL_LIMIT + 3);
    }

    #[test]
    fn test_film_counts() {
        let raw: RawFilm = serde_json::from_value(json!({
            "episode_id": 4,
            "title": "A New Hope",
            "characters": ["c1", "c2", "c3"],
            "starships": ["s1"],
            "planets": [],
            "url": "https://swapi.dev/api/films/1/"
        }))
        .unwrap();

        let film = Film::from(raw);
        assert_eq!(film.title, "A New Hope");
        assert_eq!(film.character_count, 3);
        assert_eq!(film.starship_count, 1);
        assert_eq!(film.planet_count, 0);
        assert_eq!(film.opening_crawl, "...");
    }

    #[test]
    fn test_character_homeworld_and_counts() {
        let raw: RawCharacter = serde_json::from_value(json!({
            "name": "Luke Skywalker",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["f1", "f2", "f3", "f4"],
            "starships": ["s1", "s2"],
            "url": "https://swapi.dev/api/people/1/"
        }))
        .unwrap();

        let character = Character::from(raw);
        assert_eq!(character.homeworld_url, "https://swapi.dev/api/planets/1/");
        assert_eq!(character.film_count, 4);
        assert_eq!(character.starship_count, 2);
        assert_eq!(character.vehicle_count, 0);
    }

    #[test]
    fn test_starship_serializes_mglt() {
        let raw: RawStarship = serde_json::from_value(json!({
            "name": "X-wing",
            "MGLT": "100",
            "pilots": ["p1", "p2", "p3", "p4"],
            "url": "https://swapi.dev/api/starships/12/"
        }))
        .unwrap();

        let json = serde_json::to_value(Starship::from(raw)).unwrap();
        assert_eq!(json["MGLT"], "100");
        assert_eq!(json["pilot_count"], 4);
    }
}
