//! Catalog clients for the external providers.
//!
//! Each client wraps one provider API and normalizes its raw response
//! schema into the shared item model:
//! - TMDB movie discovery (`MovieClient`)
//! - Google Books volume search (`BookClient`)
//!
//! The `CatalogClient` trait is the seam the result session works
//! against, so session logic stays independent of any one provider.

mod books;
mod movies;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CatalogItem, FetchCursor, Provider};
use crate::moods::MoodEntry;

pub use books::BookClient;
pub use movies::MovieClient;

/// A paged, mood-driven catalog source.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Which external provider this client talks to.
    fn provider(&self) -> Provider;

    /// Number of items one fetch yields, and the step the cursor
    /// advances by after a successful fetch.
    fn page_size(&self) -> u32;

    /// Cursor position a fresh query starts from.
    fn initial_cursor(&self) -> FetchCursor {
        self.provider().initial_cursor()
    }

    /// Fetch one page of items for the given mood at the given cursor.
    ///
    /// A well-formed response with no matches is `Ok` with an empty
    /// vec; only transport, HTTP, and decode problems are errors.
    async fn fetch(&self, entry: &MoodEntry, cursor: FetchCursor) -> Result<Vec<CatalogItem>>;
}
