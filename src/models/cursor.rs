//! Pagination cursor shared by catalog clients and result sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Provider-specific pagination position.
///
/// TMDB counts 1-based pages; Google Books counts a 0-based item offset.
/// The cursor only moves forward on a successful fetch and is reset to the
/// provider's initial value when the active mood changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchCursor {
    /// 1-based page number
    Page(u32),

    /// 0-based item offset
    Offset(u32),
}

impl FetchCursor {
    /// Advance past one display page of `page_size` items.
    ///
    /// Page cursors step to the next page (the provider controls how many
    /// items a page holds); offset cursors step by the requested item count.
    pub fn advance(self, page_size: u32) -> Self {
        match self {
            FetchCursor::Page(page) => FetchCursor::Page(page + 1),
            FetchCursor::Offset(offset) => FetchCursor::Offset(offset + page_size),
        }
    }
}

impl fmt::Display for FetchCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchCursor::Page(page) => write!(f, "page {page}"),
            FetchCursor::Offset(offset) => write!(f, "offset {offset}"),
        }
    }
}
