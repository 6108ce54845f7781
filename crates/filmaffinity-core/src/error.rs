//! Error types for the FilmAffinity scraper
//!
//! Transport failures and non-2xx responses are both "fetch failed" from the
//! caller's point of view; a selector that matches nothing is never an error.
//! FilmaffinityError implements Serialize so it can be handed to JSON frontends.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for FilmAffinity scraper operations
#[derive(Error, Debug)]
pub enum FilmaffinityError {
    /// HTTP request failed (DNS, connection, timeout, body decoding)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("Unexpected HTTP status {status} for {url}")]
    Status {
        /// Numeric status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Failed to build a selector or otherwise process the document
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Search query was empty after trimming
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Unknown language code
    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),
}

impl FilmaffinityError {
    /// Whether this error comes from the fetch step (transport or status).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::Status { .. })
    }
}

/// Serialize FilmaffinityError as its display string
impl Serialize for FilmaffinityError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for FilmAffinity scraper operations
pub type Result<T> = std::result::Result<T, FilmaffinityError>;
