//! Error types for the filmsok client
//!
//! Provides a single error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all filmsok client operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum FilmsokError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API answered with HTTP 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// API answered with any other non-success status
    #[error("Network failure: {0}")]
    Network(String),

    /// Response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Category string is not one the UI can produce
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Client configuration could not be applied
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FilmsokError {
    /// Whether this error belongs to the coarse "network failure" kind.
    ///
    /// Everything except a 404 counts as a network failure. The two kinds
    /// are only told apart for logging; users see the same message.
    pub fn is_network_failure(&self) -> bool {
        !matches!(self, FilmsokError::NotFound(_))
    }
}

impl Serialize for FilmsokError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for filmsok operations
pub type Result<T> = std::result::Result<T, FilmsokError>;
