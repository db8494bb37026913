// src/services/movies.rs

//! TMDB movie discovery client.
//!
//! Issues genre-filtered `/discover/movie` requests and normalizes the
//! raw payload into `MovieItem`s: poster paths become absolute image
//! URLs, genre ids resolve to display names (unknown ids are dropped),
//! and empty-string dates collapse to `None`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::MovieConfig;
use crate::error::{AppError, Result};
use crate::models::{CatalogItem, FetchCursor, Genre, MovieItem, Provider, genre_name};
use crate::moods::MoodEntry;
use crate::services::CatalogClient;

/// Client for the TMDB discovery API.
pub struct MovieClient {
    client: Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
    sort_by: String,
    page_size: u32,
}

impl MovieClient {
    /// Create a movie client from configuration.
    ///
    /// Fails fast when the API key is blank or the base URL does not
    /// parse, so a misconfigured client never reaches the network.
    pub fn new(client: Client, config: &MovieConfig, page_size: u32) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::config(format!(
                "TMDB API key is missing (set {})",
                crate::config::TMDB_KEY_VAR
            )));
        }
        Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            sort_by: config.sort_by.clone(),
            page_size,
        })
    }

    /// Fetch one page of discovery results for the given genre set.
    ///
    /// Results come back in the configured sort order and are truncated
    /// to the display page size.
    pub async fn discover(&self, genres: &[u32], page: u32) -> Result<Vec<MovieItem>> {
        let with_genres = genres
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let page_param = page.to_string();

        log::debug!("TMDB discover: with_genres={with_genres} page={page}");

        let url = format!("{}/discover/movie", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("with_genres", with_genres.as_str()),
                ("sort_by", self.sort_by.as_str()),
                ("page", page_param.as_str()),
                ("include_adult", "false"),
            ])
            .send()
            .await
            .map_err(|e| AppError::fetch(Provider::Tmdb, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(Provider::Tmdb, format!("HTTP {status}")));
        }

        let body: DiscoverResponse = response
            .json()
            .await
            .map_err(|e| AppError::fetch(Provider::Tmdb, format!("malformed response: {e}")))?;

        let mut movies: Vec<MovieItem> = body
            .results
            .into_iter()
            .map(|raw| self.normalize(raw))
            .collect();
        movies.truncate(self.page_size as usize);

        log::debug!("TMDB discover returned {} movies", movies.len());
        Ok(movies)
    }

    fn normalize(&self, raw: RawMovie) -> MovieItem {
        let poster = raw
            .poster_path
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{path}", self.image_base_url));
        let genres = raw
            .genre_ids
            .into_iter()
            .filter_map(|id| {
                genre_name(id).map(|name| Genre {
                    id,
                    name: name.to_string(),
                })
            })
            .collect();

        MovieItem {
            id: raw.id,
            title: raw.title,
            poster,
            release_date: raw.release_date.filter(|date| !date.is_empty()),
            genres,
            vote_average: raw.vote_average,
            overview: raw.overview,
        }
    }
}

#[async_trait]
impl CatalogClient for MovieClient {
    fn provider(&self) -> Provider {
        Provider::Tmdb
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn fetch(&self, entry: &MoodEntry, cursor: FetchCursor) -> Result<Vec<CatalogItem>> {
        let page = match cursor {
            FetchCursor::Page(page) => page,
            FetchCursor::Offset(offset) => {
                return Err(AppError::fetch(
                    Provider::Tmdb,
                    format!("offset cursor ({offset}) is not valid for paged discovery"),
                ));
            }
        };
        let movies = self.discover(entry.movie_genres, page).await?;
        Ok(movies.into_iter().map(CatalogItem::Movie).collect())
    }
}

/// Raw shape of a TMDB discovery response. Only the fields the item
/// model needs are decoded; everything else is ignored.
#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    #[serde(default)]
    results: Vec<RawMovie>,
}

#[derive(Debug, Deserialize)]
struct RawMovie {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    genre_ids: Vec<u32>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    overview: Option<String>,
}
