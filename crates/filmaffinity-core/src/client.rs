//! HTTP client for FilmAffinity
//!
//! One GET per call. There is no throttling and no retry: a transport error
//! or a non-2xx status is reported once and the caller decides what to do.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use tracing::debug;

use crate::error::{FilmaffinityError, Result};
use crate::types::Language;
use crate::url::FILMAFFINITY_BASE_URL;

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the FilmAffinity HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Total request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Connection timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,
    /// User-Agent header
    pub user_agent: String,
    /// Site host used for search URLs and relative image paths
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: FILMAFFINITY_BASE_URL.to_string(),
        }
    }
}

/// HTTP client for FilmAffinity pages
pub struct FilmaffinityClient {
    client: reqwest::Client,
    base_url: String,
}

impl FilmaffinityClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site host this client builds URLs against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the HTML body of an absolute URL.
    ///
    /// The body is decoded using the response `charset`, falling back to UTF-8.
    ///
    /// # Errors
    /// - `FilmaffinityError::InvalidUrl` - the URL has no http(s) scheme
    /// - `FilmaffinityError::HttpError` - network error
    /// - `FilmaffinityError::Status` - server answered with a non-2xx status
    pub async fn fetch(&self, url: &str, language: Language) -> Result<String> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FilmaffinityError::InvalidUrl(url.to_string()));
        }

        debug!(url = %url, language = %language, "GET");

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(language.accept_language()),
        );

        let response = self.client.get(url).headers(headers).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FilmaffinityError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
