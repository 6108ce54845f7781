//! Data types for the FilmAffinity scraper
//!
//! Records are built fresh for every call and handed to the caller.
//! Optional fields are `None` when the page has no such markup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilmaffinityError;

/// Site language, used as the first path segment of site URLs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanish (Spain)
    #[default]
    Es,
    /// English
    En,
    /// Spanish (Mexico)
    Mx,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::Es, Language::En, Language::Mx];

    /// Path segment used in URLs (e.g. `/es/search.php`).
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Mx => "mx",
        }
    }

    /// Value for the `Accept-Language` request header.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Language::Es => "es-ES,es;q=0.9,en;q=0.8",
            Language::En => "en-US,en;q=0.9,es;q=0.8",
            Language::Mx => "es-MX,es;q=0.9,en;q=0.8",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for Language {
    type Err = FilmaffinityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            "mx" => Ok(Language::Mx),
            other => Err(FilmaffinityError::InvalidLanguage(other.to_string())),
        }
    }
}

/// Movie information from a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Main title
    pub title: String,
    /// Release year as shown on the page
    pub year: String,
    /// Running time as shown on the page (e.g. "148 min.")
    pub duration: String,
    /// Country name, taken from the flag image alt text
    pub country: Option<String>,
    /// Absolute URL of the country flag image
    pub country_flag_image_url: Option<String>,
    /// Director names, joined with ", "
    pub director: String,
    /// Genres in page order
    pub genres: Vec<String>,
    /// Cast names in page order
    pub cast: Vec<String>,
    /// Synopsis text
    pub synopsis: String,
    /// Poster image URL
    pub image_url: Option<String>,
    /// Large poster image URL
    pub large_image_url: Option<String>,
    /// Link target of the trailers tab, empty when there is no such tab
    pub trailers_page_url: String,
}

/// Trailer entry from a trailers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    /// `data-evideo-id` attribute
    pub id: Option<String>,
    /// `data-evideo-num` attribute
    pub sequence_number: Option<String>,
    /// Trailer title
    pub title: String,
    /// `src` of the embedded player frame
    pub embed_url: Option<String>,
}

/// Search result item from a title search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Movie title
    pub title: String,
    /// Poster thumbnail URL (lazy-loaded `data-src`)
    pub thumbnail_url: Option<String>,
    /// Detail page URL, empty if the result has no title link
    pub detail_page_url: String,
    /// Numeric FilmAffinity id parsed from the detail page URL
    pub film_id: Option<u32>,
    /// Absolute URL of the country flag image
    pub country_flag_image_url: Option<String>,
}
