//! Normalized movie data from the TMDB discovery endpoint.

use serde::{Deserialize, Serialize};

/// Display-name table for the genre ids this domain trafficks in.
///
/// Ids outside this table are dropped from an item's genre list during
/// normalization rather than treated as errors.
const GENRE_NAMES: &[(u32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (18, "Drama"),
    (14, "Fantasy"),
    (27, "Horror"),
    (10749, "Romance"),
    (878, "Sci-Fi"),
    (53, "Thriller"),
];

/// Resolve a TMDB genre id to its display name, if known.
pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRE_NAMES
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

/// A movie genre with its resolved display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// TMDB genre id
    pub id: u32,

    /// Resolved display name
    pub name: String,
}

/// A movie normalized from one TMDB discovery result.
///
/// Upstream fields are inconsistently populated, so everything except the id
/// is optional; the poster is a full URL (base prefix already composed).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieItem {
    /// TMDB movie id
    pub id: u64,

    /// Movie title
    pub title: Option<String>,

    /// Full poster URL
    pub poster: Option<String>,

    /// Release date as reported upstream (freeform, e.g. "2014-03-07")
    pub release_date: Option<String>,

    /// Genres with resolved display names; unresolvable ids are dropped
    pub genres: Vec<Genre>,

    /// Average rating, 0.0-10.0
    pub vote_average: Option<f64>,

    /// Synopsis text
    pub overview: Option<String>,
}

impl MovieItem {
    /// The movie's public TMDB page.
    pub fn tmdb_url(&self) -> String {
        format!("https://www.themoviedb.org/movie/{}", self.id)
    }
}
