//! FilmAffinity Scraper Core Library
//!
//! This crate extracts structured movie metadata from FilmAffinity
//! (filmaffinity.com) pages.
//!
//! # Features
//! - Movie detail: title, year, duration, country, director, genres, cast,
//!   synopsis, posters and the trailers page link
//! - Trailer list of a movie's trailers page
//! - Title search in Spanish (`es`, `mx`) or English (`en`)
//!
//! Each call performs exactly one GET request and one parse. Missing markup
//! produces empty or `None` fields instead of errors.

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;
pub mod url;

// Re-export main types for convenience
pub use client::{ClientConfig, FilmaffinityClient};
pub use error::{FilmaffinityError, Result};
pub use scraper::{FilmaffinityScraper, ScraperConfig};
pub use types::{Language, MovieDetail, SearchResult, Trailer};
