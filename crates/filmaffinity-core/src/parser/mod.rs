//! HTML parsers for FilmAffinity pages
//!
//! This module contains parsers for extracting data from FilmAffinity HTML pages:
//! - `movie`: Parse a movie detail page
//! - `trailers`: Parse a trailers page
//! - `search`: Parse a title search results page
//!
//! A selector that matches nothing yields an empty or `None` field, never an error.

pub mod movie;
pub mod search;
pub mod trailers;

use scraper::{ElementRef, Html, Selector};

use crate::error::{FilmaffinityError, Result};

// Re-export main parsing functions
pub use movie::parse_movie_detail;
pub use search::parse_search_results;
pub use trailers::parse_trailers;

/// Compile a built-in CSS selector.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| FilmaffinityError::ParseError(format!("Invalid selector {:?}: {:?}", css, e)))
}

/// Text content of an element with surrounding whitespace removed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first element matching `selector` under `scope`.
pub(crate) fn first_text(scope: &ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default()
}

/// Attribute value of the first element matching `selector` under `scope`.
pub(crate) fn first_attr(scope: &ElementRef, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
}

/// Find the `<dd>` directly following a `<dt>` whose text contains one of `labels`.
///
/// The description must also match `description`, mirroring `dt + dd[...]`.
pub(crate) fn labeled_description<'a>(
    document: &'a Html,
    labels: &[&str],
    description: &Selector,
) -> Result<Option<ElementRef<'a>>> {
    let term_selector = selector("dt")?;

    let found = document
        .select(&term_selector)
        .filter(|dt| {
            let text = dt.text().collect::<String>();
            labels.iter().any(|label| text.contains(label))
        })
        .find_map(|dt| {
            dt.next_siblings()
                .find_map(ElementRef::wrap)
                .filter(|dd| description.matches(dd))
        });

    Ok(found)
}
