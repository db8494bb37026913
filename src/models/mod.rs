// src/models/mod.rs

//! Domain models for the moodshelf library.
//!
//! This module contains the normalized item types both catalog providers are
//! mapped into, plus the pagination cursor shared by clients and sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

mod book;
mod cursor;
mod item;
mod movie;

// Re-export all public types
pub use book::BookItem;
pub use cursor::FetchCursor;
pub use item::CatalogItem;
pub use movie::{Genre, MovieItem, genre_name};

/// An external catalog provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// The Movie Database (movie discovery)
    Tmdb,
    /// Google Books (volume search)
    GoogleBooks,
}

impl Provider {
    /// The cursor value a fresh query starts from.
    ///
    /// TMDB paginates by 1-based page number, Google Books by 0-based
    /// item offset.
    pub fn initial_cursor(&self) -> FetchCursor {
        match self {
            Provider::Tmdb => FetchCursor::Page(1),
            Provider::GoogleBooks => FetchCursor::Offset(0),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Tmdb => write!(f, "TMDB"),
            Provider::GoogleBooks => write!(f, "Google Books"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_cursor_per_provider() {
        assert_eq!(Provider::Tmdb.initial_cursor(), FetchCursor::Page(1));
        assert_eq!(
            Provider::GoogleBooks.initial_cursor(),
            FetchCursor::Offset(0)
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Provider::Tmdb.to_string(), "TMDB");
        assert_eq!(Provider::GoogleBooks.to_string(), "Google Books");
    }
}
