// src/error.rs

//! Unified error handling for the moodshelf library.

use std::fmt;

use thiserror::Error;

use crate::models::Provider;

/// Result type alias for moodshelf operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required configuration is missing or invalid (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog fetch failed: transport error, non-success status,
    /// or malformed response body
    #[error("{provider} fetch failed: {message}")]
    Fetch { provider: Provider, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a fetch error tagged with the failing provider.
    pub fn fetch(provider: Provider, message: impl fmt::Display) -> Self {
        Self::Fetch {
            provider,
            message: message.to_string(),
        }
    }

    /// The provider a fetch error originated from, if any.
    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::Fetch { provider, .. } => Some(*provider),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_provider() {
        let err = AppError::fetch(Provider::Tmdb, "HTTP 500 Internal Server Error");
        assert_eq!(
            err.to_string(),
            "TMDB fetch failed: HTTP 500 Internal Server Error"
        );
        assert_eq!(err.provider(), Some(Provider::Tmdb));
    }

    #[test]
    fn config_error_has_no_provider() {
        let err = AppError::config("TMDB_API_KEY is not set");
        assert!(err.provider().is_none());
        assert!(err.to_string().contains("TMDB_API_KEY"));
    }
}
