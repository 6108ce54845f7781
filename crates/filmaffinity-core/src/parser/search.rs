//! Search results parser for FilmAffinity
//!
//! Parses HTML from a title search page. Each `.se-it` item becomes one
//! [`SearchResult`], in document order.

use scraper::Html;

use crate::error::Result;
use crate::types::SearchResult;
use crate::url::{extract_film_id, resolve_site_url};

use super::{first_attr, first_text, selector};

/// Parse search results from a FilmAffinity search page.
///
/// # Arguments
/// * `html` - Raw HTML content of the search results page
/// * `base_url` - Site host used to resolve relative flag image paths
///
/// # Returns
/// * `Ok(Vec<SearchResult>)` - empty when the page lists no results
/// * `Err(FilmaffinityError::ParseError)` only if a built-in selector is invalid
pub fn parse_search_results(html: &str, base_url: &str) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);

    let item = selector(".se-it")?;
    let title_link = selector(".mc-title a")?;
    let poster = selector(".mc-poster img")?;
    let flag = selector(".nflag")?;

    let results = document
        .select(&item)
        .map(|el| {
            let detail_page_url = first_attr(&el, &title_link, "href").unwrap_or_default();
            let film_id = extract_film_id(&detail_page_url);
            let country_flag_image_url = first_attr(&el, &flag, "src")
                .filter(|src| !src.is_empty())
                .map(|src| resolve_site_url(base_url, &src));

            SearchResult {
                title: first_text(&el, &title_link),
                thumbnail_url: first_attr(&el, &poster, "data-src"),
                detail_page_url,
                film_id,
                country_flag_image_url,
            }
        })
        .collect();

    Ok(results)
}
