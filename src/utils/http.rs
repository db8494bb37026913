// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::{AppError, Result};

/// Create the configured HTTP client shared by the catalog clients.
///
/// The timeout bounds every catalog request; expiry surfaces through the
/// clients as a fetch failure.
pub fn create_client(config: &HttpConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))
}
