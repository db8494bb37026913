//! The provider-spanning catalog item.

use serde::{Deserialize, Serialize};

use super::{BookItem, MovieItem};

/// One normalized result from either catalog provider.
///
/// The two provider shapes stay distinct behind the variants; the shared
/// projections below are what list rendering and selection key off, so code
/// that does not care about the provider never matches on the variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogItem {
    Movie(MovieItem),
    Book(BookItem),
}

impl CatalogItem {
    /// Provider-stable unique identifier, the sole list/dedup key.
    pub fn key(&self) -> String {
        match self {
            CatalogItem::Movie(movie) => movie.id.to_string(),
            CatalogItem::Book(book) => book.id.clone(),
        }
    }

    /// Display title, when the upstream entry carries one.
    pub fn title(&self) -> Option<&str> {
        match self {
            CatalogItem::Movie(movie) => movie.title.as_deref(),
            CatalogItem::Book(book) => book.title.as_deref(),
        }
    }

    /// Full poster URL; absence means the presentation shows a placeholder.
    pub fn poster(&self) -> Option<&str> {
        match self {
            CatalogItem::Movie(movie) => movie.poster.as_deref(),
            CatalogItem::Book(book) => book.poster.as_deref(),
        }
    }

    /// Synopsis text for the detail overlay.
    pub fn synopsis(&self) -> Option<&str> {
        match self {
            CatalogItem::Movie(movie) => movie.overview.as_deref(),
            CatalogItem::Book(book) => book.description.as_deref(),
        }
    }

    /// External detail page: the TMDB movie page (composed from the id) or
    /// the volume's info link.
    pub fn detail_link(&self) -> Option<String> {
        match self {
            CatalogItem::Movie(movie) => Some(movie.tmdb_url()),
            CatalogItem::Book(book) => book.info_link.clone(),
        }
    }
}

impl From<MovieItem> for CatalogItem {
    fn from(movie: MovieItem) -> Self {
        CatalogItem::Movie(movie)
    }
}

impl From<BookItem> for CatalogItem {
    fn from(book: BookItem) -> Self {
        CatalogItem::Book(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;

    fn sample_movie() -> MovieItem {
        MovieItem {
            id: 550,
            title: Some("Fight Club".to_string()),
            poster: Some("https://image.tmdb.org/t/p/w500/fight-club.jpg".to_string()),
            release_date: Some("1999-10-15".to_string()),
            genres: vec![Genre {
                id: 18,
                name: "Drama".to_string(),
            }],
            vote_average: Some(8.4),
            overview: Some("An insomniac office worker...".to_string()),
        }
    }

    fn sample_book() -> BookItem {
        BookItem {
            id: "wrOQLV6xB-wC".to_string(),
            title: Some("Harry Potter".to_string()),
            authors: vec!["J. K. Rowling".to_string()],
            published_date: Some("2015-12-08".to_string()),
            poster: None,
            info_link: Some("https://books.google.com/books?id=wrOQLV6xB-wC".to_string()),
            description: None,
        }
    }

    #[test]
    fn key_spans_both_id_shapes() {
        assert_eq!(CatalogItem::from(sample_movie()).key(), "550");
        assert_eq!(CatalogItem::from(sample_book()).key(), "wrOQLV6xB-wC");
    }

    #[test]
    fn detail_link_is_composed_for_movies() {
        let item = CatalogItem::from(sample_movie());
        assert_eq!(
            item.detail_link().as_deref(),
            Some("https://www.themoviedb.org/movie/550")
        );
    }

    #[test]
    fn detail_link_passes_through_for_books() {
        let item = CatalogItem::from(sample_book());
        assert_eq!(
            item.detail_link().as_deref(),
            Some("https://books.google.com/books?id=wrOQLV6xB-wC")
        );
    }

    #[test]
    fn poster_absence_is_not_an_error() {
        let item = CatalogItem::from(sample_book());
        assert_eq!(item.poster(), None);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(CatalogItem::from(sample_movie())).unwrap();
        assert_eq!(json["kind"], "movie");
        assert_eq!(json["id"], 550);

        let json = serde_json::to_value(CatalogItem::from(sample_book())).unwrap();
        assert_eq!(json["kind"], "book");
        assert_eq!(json["id"], "wrOQLV6xB-wC");
    }
}
