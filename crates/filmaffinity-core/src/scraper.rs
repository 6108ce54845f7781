//! Main FilmAffinity scraper API
//!
//! Combines the HTTP client with the page parsers. Each operation is one GET
//! followed by a synchronous parse.
//!
//! Two flavours are offered:
//! - `movie`, `trailers`, `search`: return [`Result`] uniformly.
//! - `get_movie_detail`, `get_trailers`, `search_by_title[_in]`: legacy signaling.
//!   Detail and trailers yield `None` on failure, search yields an empty vector,
//!   so a failed search cannot be told apart from a search with no matches.

use tracing::{debug, warn};

use crate::client::{ClientConfig, FilmaffinityClient};
use crate::error::{FilmaffinityError, Result};
use crate::parser::{parse_movie_detail, parse_search_results, parse_trailers};
use crate::types::{Language, MovieDetail, SearchResult, Trailer};
use crate::url::{build_movie_url, build_search_url};

/// Configuration for [`FilmaffinityScraper`]
#[derive(Debug, Clone, Default)]
pub struct ScraperConfig {
    /// HTTP client configuration
    pub client: ClientConfig,
    /// Language used for searches and request headers (default: `es`)
    pub language: Language,
}

/// Main scraper API for FilmAffinity
///
/// # Example
/// ```no_run
/// use filmaffinity_core::{FilmaffinityScraper, Language};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut scraper = FilmaffinityScraper::new()?;
///     scraper.set_language(Language::En);
///
///     let results = scraper.search("Inception").await?;
///     if let Some(first) = results.first() {
///         let movie = scraper.movie(&first.detail_page_url).await?;
///         println!("{} ({})", movie.title, movie.year);
///     }
///     Ok(())
/// }
/// ```
pub struct FilmaffinityScraper {
    client: FilmaffinityClient,
    language: Language,
}

impl FilmaffinityScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default())
    }

    /// Create a new scraper with custom configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ScraperConfig) -> Result<Self> {
        let client = FilmaffinityClient::with_config(config.client)?;
        Ok(Self {
            client,
            language: config.language,
        })
    }

    /// Create a new scraper with a pre-configured client.
    pub fn with_client(client: FilmaffinityClient, language: Language) -> Self {
        Self { client, language }
    }

    /// Language currently used for searches.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Change the language used by subsequent searches.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Get movie information from a detail page URL.
    ///
    /// # Errors
    /// - `FilmaffinityError::InvalidUrl` if `url` is not an absolute http(s) URL
    /// - `FilmaffinityError::HttpError` / `FilmaffinityError::Status` if the fetch fails
    pub async fn movie(&self, url: &str) -> Result<MovieDetail> {
        let html = self.client.fetch(url, self.language).await?;
        let movie = parse_movie_detail(&html, self.client.base_url())?;
        debug!(
            url = %url,
            genres = movie.genres.len(),
            cast = movie.cast.len(),
            "parsed movie detail"
        );
        Ok(movie)
    }

    /// Get movie information by FilmAffinity id, using the current language.
    ///
    /// # Errors
    /// - `FilmaffinityError::InvalidUrl` if `film_id` is 0
    /// - `FilmaffinityError::HttpError` / `FilmaffinityError::Status` if the fetch fails
    pub async fn movie_by_id(&self, film_id: u32) -> Result<MovieDetail> {
        if film_id == 0 {
            return Err(FilmaffinityError::InvalidUrl(
                "film id must be positive".to_string(),
            ));
        }
        let url = build_movie_url(self.client.base_url(), self.language, film_id);
        self.movie(&url).await
    }

    /// Get all trailers listed on a trailers page.
    ///
    /// A page with no trailers yields `Ok` with an empty vector.
    ///
    /// # Errors
    /// - `FilmaffinityError::InvalidUrl` if `url` is not an absolute http(s) URL
    /// - `FilmaffinityError::HttpError` / `FilmaffinityError::Status` if the fetch fails
    pub async fn trailers(&self, url: &str) -> Result<Vec<Trailer>> {
        let html = self.client.fetch(url, self.language).await?;
        let trailers = parse_trailers(&html)?;
        debug!(url = %url, count = trailers.len(), "parsed trailers");
        Ok(trailers)
    }

    /// Search movies by title using the current language.
    ///
    /// # Errors
    /// - `FilmaffinityError::InvalidQuery` if `query` is empty or whitespace-only
    /// - `FilmaffinityError::HttpError` / `FilmaffinityError::Status` if the fetch fails
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.search_in(query, self.language).await
    }

    /// Search movies by title in an explicit language.
    ///
    /// The scraper's own language setting is neither read nor changed.
    ///
    /// # Errors
    /// Same as [`FilmaffinityScraper::search`].
    pub async fn search_in(&self, query: &str, language: Language) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(FilmaffinityError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = build_search_url(self.client.base_url(), language, query);
        let html = self.client.fetch(&url, language).await?;
        let results = parse_search_results(&html, self.client.base_url())?;
        debug!(url = %url, count = results.len(), "parsed search results");
        Ok(results)
    }

    /// Get movie information, or `None` if the page could not be fetched.
    pub async fn get_movie_detail(&self, url: &str) -> Option<MovieDetail> {
        self.movie(url)
            .await
            .map_err(|e| warn!(url = %url, error = %e, "error fetching movie data"))
            .ok()
    }

    /// Get trailers, or `None` if the page could not be fetched.
    ///
    /// `Some` with an empty vector means the page had no trailers.
    pub async fn get_trailers(&self, url: &str) -> Option<Vec<Trailer>> {
        self.trailers(url)
            .await
            .map_err(|e| warn!(url = %url, error = %e, "error fetching trailers"))
            .ok()
    }

    /// Search by title, yielding an empty vector on any failure.
    pub async fn search_by_title(&self, query: &str) -> Vec<SearchResult> {
        self.search_by_title_in(query, self.language).await
    }

    /// Search by title in an explicit language, yielding an empty vector on any failure.
    pub async fn search_by_title_in(&self, query: &str, language: Language) -> Vec<SearchResult> {
        self.search_in(query, language)
            .await
            .map_err(|e| {
                warn!(query = %query, language = %language, error = %e, "error searching movies")
            })
            .unwrap_or_default()
    }
}
