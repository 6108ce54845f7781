//! URL helpers for FilmAffinity
//!
//! Builds search and detail page URLs and resolves the relative image paths
//! found in page markup.

use crate::types::Language;

/// Default site host
pub const FILMAFFINITY_BASE_URL: &str = "https://www.filmaffinity.com";

/// Build a title search URL.
///
/// # Examples
/// ```
/// use filmaffinity_core::{url::build_search_url, Language};
///
/// assert_eq!(
///     build_search_url("https://www.filmaffinity.com", Language::En, "star wars"),
///     "https://www.filmaffinity.com/en/search.php?stype=title&stext=star%20wars"
/// );
/// ```
pub fn build_search_url(base_url: &str, language: Language, query: &str) -> String {
    format!(
        "{}/{}/search.php?stype=title&stext={}",
        base_url.trim_end_matches('/'),
        language.as_path_segment(),
        urlencoding::encode(query)
    )
}

/// Build a movie detail page URL from its numeric id.
pub fn build_movie_url(base_url: &str, language: Language, film_id: u32) -> String {
    format!(
        "{}/{}/film{}.html",
        base_url.trim_end_matches('/'),
        language.as_path_segment(),
        film_id
    )
}

/// Extract the numeric film id from a detail page URL.
///
/// # Examples
/// ```
/// use filmaffinity_core::url::extract_film_id;
///
/// assert_eq!(extract_film_id("/es/film971380.html"), Some(971380));
/// assert_eq!(extract_film_id("/es/search.php"), None);
/// ```
pub fn extract_film_id(url: &str) -> Option<u32> {
    let re = regex_lite::Regex::new(r"film(\d+)\.html").ok()?;
    let caps = re.captures(url)?;
    let id: u32 = caps.get(1)?.as_str().parse().ok()?;

    if id > 0 {
        Some(id)
    } else {
        None
    }
}

/// Resolve a path from page markup against the site host.
///
/// Absolute URLs are returned unchanged.
pub fn resolve_site_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if let Some(rest) = path.strip_prefix("//") {
        return format!("https://{}", rest);
    }

    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
