//! Normalized book data from the Google Books volume search.

use serde::{Deserialize, Serialize};

/// A book normalized from one Google Books volume entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookItem {
    /// Google Books volume id
    pub id: String,

    /// Book title
    pub title: Option<String>,

    /// Author names in upstream order; empty when the volume lists none
    pub authors: Vec<String>,

    /// Published date as reported upstream (freeform, e.g. "2005" or
    /// "2005-03-01")
    pub published_date: Option<String>,

    /// Thumbnail URL, rewritten to the https scheme
    pub poster: Option<String>,

    /// Link to the volume's Google Books page
    pub info_link: Option<String>,

    /// Synopsis text
    pub description: Option<String>,
}

impl BookItem {
    /// Authors joined for display, or `None` when the volume lists none.
    pub fn byline(&self) -> Option<String> {
        if self.authors.is_empty() {
            None
        } else {
            Some(self.authors.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> BookItem {
        BookItem {
            id: "zyTCAlFPjgYC".to_string(),
            title: Some("The Google Story".to_string()),
            authors: vec!["David A. Vise".to_string(), "Mark Malseed".to_string()],
            published_date: Some("2005-11-15".to_string()),
            poster: Some("https://books.google.com/books/content?id=zyTCAlFPjgYC".to_string()),
            info_link: Some("https://books.google.com/books?id=zyTCAlFPjgYC".to_string()),
            description: None,
        }
    }

    #[test]
    fn byline_joins_authors() {
        let book = sample_book();
        assert_eq!(book.byline().as_deref(), Some("David A. Vise, Mark Malseed"));
    }

    #[test]
    fn byline_absent_without_authors() {
        let mut book = sample_book();
        book.authors.clear();
        assert_eq!(book.byline(), None);
    }
}
