//! HTTP client for the TMDB API
//!
//! Wraps a `reqwest::Client` carrying the shared request options
//! (bearer token, JSON accept header) and classifies failed responses.
//! Requests are sent once; there is no retry or backoff.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{FilmsokError, Result};
use crate::url::{DEFAULT_BASE_URL, DEFAULT_LOCALE};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (default: TMDB v3)
    pub base_url: String,
    /// Response language for every request (default: "sv-SE")
    pub locale: String,
    /// TMDB read access token, sent as a bearer token
    pub access_token: Option<String>,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            access_token: None,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from `TMDB_*` environment variables
    ///
    /// Reads `TMDB_ACCESS_TOKEN`, `TMDB_BASE_URL`, `TMDB_LANGUAGE` and
    /// `TMDB_TIMEOUT_SECS`. Unset or blank variables keep their defaults.
    ///
    /// # Errors
    /// - `Config` if `TMDB_TIMEOUT_SECS` is not a whole number of seconds
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(token) = var("TMDB_ACCESS_TOKEN") {
            config.access_token = Some(token.trim().to_string());
        }
        if let Some(base_url) = var("TMDB_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(locale) = var("TMDB_LANGUAGE") {
            config.locale = locale;
        }
        if let Some(timeout) = var("TMDB_TIMEOUT_SECS") {
            config.timeout_secs = timeout.trim().parse().map_err(|_| {
                FilmsokError::Config(format!("TMDB_TIMEOUT_SECS must be seconds, got {timeout:?}"))
            })?;
        }

        Ok(config)
    }
}

/// HTTP client wrapper for TMDB
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    locale: String,
}

impl TmdbClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `Config` if the access token cannot be used as a header value
    /// - `HttpError` if the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| FilmsokError::Config(format!("access token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(FilmsokError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
            locale: config.locale,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Fetch a URL and decode its JSON body
    ///
    /// # Errors
    /// - `NotFound` - Server returned 404
    /// - `Network` - Server returned any other non-success status
    /// - `HttpError` - Transport failure
    /// - `ParseError` - Body is not the expected JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "TMDB request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FilmsokError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FilmsokError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            return Err(FilmsokError::Network(format!("TMDB returned {}", status)));
        }

        let body = response.text().await.map_err(FilmsokError::HttpError)?;
        serde_json::from_str(&body).map_err(|e| FilmsokError::ParseError(e.to_string()))
    }
}
