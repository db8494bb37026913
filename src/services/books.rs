// src/services/books.rs

//! Google Books volume search client.
//!
//! Issues keyword searches against `/volumes` and flattens the nested
//! `volumeInfo` payload into `BookItem`s. Thumbnail URLs are rewritten
//! to https because the API still hands out plain-http links.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::BookConfig;
use crate::error::{AppError, Result};
use crate::models::{BookItem, CatalogItem, FetchCursor, Provider};
use crate::moods::MoodEntry;
use crate::services::CatalogClient;

/// Client for the Google Books volumes API.
pub struct BookClient {
    client: Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl BookClient {
    /// Create a book client from configuration.
    ///
    /// Fails fast when the API key is blank or the base URL does not
    /// parse, so a misconfigured client never reaches the network.
    pub fn new(client: Client, config: &BookConfig, page_size: u32) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::config(format!(
                "Google Books API key is missing (set {})",
                crate::config::BOOKS_KEY_VAR
            )));
        }
        Url::parse(&config.base_url)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size,
        })
    }

    /// Fetch one window of search results starting at `start_index`.
    pub async fn search(
        &self,
        query: &str,
        start_index: u32,
        max_results: u32,
    ) -> Result<Vec<BookItem>> {
        let start_param = start_index.to_string();
        let max_param = max_results.to_string();

        log::debug!("Google Books search: q={query:?} start_index={start_index}");

        let url = format!("{}/volumes", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("startIndex", start_param.as_str()),
                ("maxResults", max_param.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::fetch(Provider::GoogleBooks, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(
                Provider::GoogleBooks,
                format!("HTTP {status}"),
            ));
        }

        let body: VolumesResponse = response.json().await.map_err(|e| {
            AppError::fetch(Provider::GoogleBooks, format!("malformed response: {e}"))
        })?;

        let books: Vec<BookItem> = body.items.into_iter().map(normalize_volume).collect();
        log::debug!("Google Books search returned {} volumes", books.len());
        Ok(books)
    }
}

#[async_trait]
impl CatalogClient for BookClient {
    fn provider(&self) -> Provider {
        Provider::GoogleBooks
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn fetch(&self, entry: &MoodEntry, cursor: FetchCursor) -> Result<Vec<CatalogItem>> {
        let start_index = match cursor {
            FetchCursor::Offset(offset) => offset,
            FetchCursor::Page(page) => {
                return Err(AppError::fetch(
                    Provider::GoogleBooks,
                    format!("page cursor ({page}) is not valid for offset-based search"),
                ));
            }
        };
        let books = self
            .search(entry.book_query, start_index, self.page_size)
            .await?;
        Ok(books.into_iter().map(CatalogItem::Book).collect())
    }
}

fn normalize_volume(volume: Volume) -> BookItem {
    let info = volume.volume_info;
    BookItem {
        id: volume.id,
        title: info.title,
        authors: info.authors,
        published_date: info.published_date,
        poster: info
            .image_links
            .and_then(|links| links.thumbnail)
            .map(|thumb| ensure_https(&thumb)),
        info_link: info.info_link,
        description: info.description,
    }
}

fn ensure_https(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}

/// Raw shape of a volumes response. The `items` array is absent, not
/// empty, when a query matches nothing.
#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    id: String,
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    published_date: Option<String>,
    #[serde(default)]
    image_links: Option<ImageLinks>,
    #[serde(default)]
    info_link: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    #[serde(default)]
    thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_config(base_url: String) -> BookConfig {
        BookConfig {
            api_key: "books-key".to_string(),
            base_url,
        }
    }

    fn test_client(base_url: String) -> BookClient {
        BookClient::new(Client::new(), &test_config(base_url), 10).unwrap()
    }

    fn volume_body() -> String {
        serde_json::json!({
            "kind": "books#volumes",
            "totalItems": 1,
            "items": [{
                "id": "abc123",
                "volumeInfo": {
                    "title": "A Quiet Book",
                    "authors": ["Jane Doe", "John Roe"],
                    "publishedDate": "2019",
                    "description": "Slow and thoughtful.",
                    "imageLinks": {
                        "smallThumbnail": "http://books.google.com/small.jpg",
                        "thumbnail": "http://books.google.com/thumb.jpg"
                    },
                    "infoLink": "https://books.google.com/books?id=abc123"
                }
            }]
        })
        .to_string()
    }

    #[test]
    fn blank_api_key_fails_construction() {
        let config = BookConfig {
            api_key: String::new(),
            base_url: "https://www.googleapis.com/books/v1".to_string(),
        };
        assert!(matches!(
            BookClient::new(Client::new(), &config, 10),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn ensure_https_rewrites_plain_http() {
        assert_eq!(
            ensure_https("http://books.google.com/thumb.jpg"),
            "https://books.google.com/thumb.jpg"
        );
        assert_eq!(
            ensure_https("https://books.google.com/thumb.jpg"),
            "https://books.google.com/thumb.jpg"
        );
    }

    #[tokio::test]
    async fn search_sends_expected_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/volumes")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "life drama".into()),
                Matcher::UrlEncoded("startIndex".into(), "0".into()),
                Matcher::UrlEncoded("maxResults".into(), "10".into()),
                Matcher::UrlEncoded("key".into(), "books-key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(volume_body())
            .create_async()
            .await;

        let client = test_client(server.url());
        let books = client.search("life drama", 0, 10).await.unwrap();

        mock.assert_async().await;
        assert_eq!(books.len(), 1);
    }

    #[tokio::test]
    async fn search_flattens_volume_info() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(volume_body())
            .create_async()
            .await;

        let client = test_client(server.url());
        let books = client.search("anything", 0, 10).await.unwrap();

        let book = &books[0];
        assert_eq!(book.id, "abc123");
        assert_eq!(book.title.as_deref(), Some("A Quiet Book"));
        assert_eq!(book.authors, vec!["Jane Doe", "John Roe"]);
        assert_eq!(book.published_date.as_deref(), Some("2019"));
        // Thumbnail came back over plain http and gets upgraded.
        assert_eq!(
            book.poster.as_deref(),
            Some("https://books.google.com/thumb.jpg")
        );
        assert_eq!(
            book.info_link.as_deref(),
            Some("https://books.google.com/books?id=abc123")
        );
    }

    #[tokio::test]
    async fn search_tolerates_sparse_volumes() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "items": [{ "id": "bare", "volumeInfo": {} }]
        });
        server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = test_client(server.url());
        let books = client.search("obscure", 0, 10).await.unwrap();

        let book = &books[0];
        assert_eq!(book.id, "bare");
        assert!(book.title.is_none());
        assert!(book.authors.is_empty());
        assert!(book.poster.is_none());
        assert!(book.info_link.is_none());
    }

    #[tokio::test]
    async fn search_absent_items_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"kind": "books#volumes", "totalItems": 0}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let books = client.search("no matches", 0, 10).await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn search_http_error_is_fetch_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/volumes")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error": {"message": "quota"}}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.search("anything", 0, 10).await.unwrap_err();

        assert_eq!(err.provider(), Some(Provider::GoogleBooks));
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn fetch_rejects_page_cursor() {
        let client = test_client("https://www.googleapis.com/books/v1".to_string());
        let entry = crate::moods::lookup("sad").unwrap();
        let err = client.fetch(entry, FetchCursor::Page(1)).await.unwrap_err();
        assert_eq!(err.provider(), Some(Provider::GoogleBooks));
    }
}
