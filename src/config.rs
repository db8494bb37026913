// src/config.rs

//! Application configuration.
//!
//! Settings load from an optional TOML file with the two provider API keys
//! overlaid from the environment (`TMDB_API_KEY`, `GOOGLE_BOOKS_API_KEY`).
//! Keys are required: `validate()` fails fast at startup when either is
//! absent, instead of letting the first fetch discover it.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Environment variable holding the TMDB API key.
pub const TMDB_KEY_VAR: &str = "TMDB_API_KEY";

/// Environment variable holding the Google Books API key.
pub const BOOKS_KEY_VAR: &str = "GOOGLE_BOOKS_API_KEY";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TMDB client settings
    #[serde(default)]
    pub movies: MovieConfig,

    /// Google Books client settings
    #[serde(default)]
    pub books: BookConfig,

    /// HTTP client behavior
    #[serde(default)]
    pub http: HttpConfig,

    /// Items per display page (also the book request size and the offset
    /// step)
    #[serde(default = "defaults::page_size")]
    pub page_size: u32,
}

impl Config {
    /// Build a configuration from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load configuration from a TOML file, then overlay environment
    /// overrides (the environment wins for API keys).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    ///
    /// Missing API keys are fatal here so the process fails at startup
    /// rather than on the first fetch.
    pub fn validate(&self) -> Result<()> {
        if self.movies.api_key.trim().is_empty() {
            return Err(AppError::config(format!(
                "TMDB API key is missing (set {TMDB_KEY_VAR} or movies.api_key)"
            )));
        }
        if self.books.api_key.trim().is_empty() {
            return Err(AppError::config(format!(
                "Google Books API key is missing (set {BOOKS_KEY_VAR} or books.api_key)"
            )));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if self.page_size == 0 {
            return Err(AppError::config("page_size must be > 0"));
        }
        for (name, value) in [
            ("movies.base_url", &self.movies.base_url),
            ("movies.image_base_url", &self.movies.image_base_url),
            ("books.base_url", &self.books.base_url),
        ] {
            if Url::parse(value).is_err() {
                return Err(AppError::config(format!("{name} is not a valid URL: {value}")));
            }
        }
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(key) = env::var(TMDB_KEY_VAR) {
            if !key.trim().is_empty() {
                self.movies.api_key = key;
            }
        }
        if let Ok(key) = env::var(BOOKS_KEY_VAR) {
            if !key.trim().is_empty() {
                self.books.api_key = key;
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            movies: MovieConfig::default(),
            books: BookConfig::default(),
            http: HttpConfig::default(),
            page_size: defaults::page_size(),
        }
    }
}

/// TMDB client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieConfig {
    /// API key (required; usually injected via `TMDB_API_KEY`)
    #[serde(default)]
    pub api_key: String,

    /// Discovery API base URL
    #[serde(default = "defaults::tmdb_base_url")]
    pub base_url: String,

    /// Prefix composed onto relative poster paths
    #[serde(default = "defaults::tmdb_image_base_url")]
    pub image_base_url: String,

    /// Discovery sort order
    #[serde(default = "defaults::sort_by")]
    pub sort_by: String,
}

impl Default for MovieConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: defaults::tmdb_base_url(),
            image_base_url: defaults::tmdb_image_base_url(),
            sort_by: defaults::sort_by(),
        }
    }
}

/// Google Books client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    /// API key (required; usually injected via `GOOGLE_BOOKS_API_KEY`)
    #[serde(default)]
    pub api_key: String,

    /// Volume search API base URL
    #[serde(default = "defaults::books_base_url")]
    pub base_url: String,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: defaults::books_base_url(),
        }
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for catalog requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

mod defaults {
    pub fn page_size() -> u32 {
        10
    }

    pub fn tmdb_base_url() -> String {
        "https://api.themoviedb.org/3".into()
    }

    pub fn tmdb_image_base_url() -> String {
        "https://image.tmdb.org/t/p/w500".into()
    }

    pub fn sort_by() -> String {
        "popularity.desc".into()
    }

    pub fn books_base_url() -> String {
        "https://www.googleapis.com/books/v1".into()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; moodshelf/0.1)".into()
    }

    pub fn timeout() -> u64 {
        12
    }
}
