//! Movie detail parser for FilmAffinity
//!
//! Parses HTML from a movie detail page into a [`MovieDetail`].

use scraper::Html;

use crate::error::Result;
use crate::types::MovieDetail;
use crate::url::resolve_site_url;

use super::{element_text, first_attr, first_text, labeled_description, selector};

const YEAR_LABELS: &[&str] = &["Año", "Year"];
const DURATION_LABELS: &[&str] = &["Duración", "Running time", "Duration"];
const DIRECTOR_LABELS: &[&str] = &["Dirección", "Director"];
const GENRE_LABELS: &[&str] = &["Género", "Genre"];
const SYNOPSIS_LABELS: &[&str] = &["Sinopsis", "Synopsis"];
const TRAILERS_TAB_LABELS: &[&str] = &["Tráilers", "Trailers"];

/// Parse a movie detail page.
///
/// # Arguments
/// * `html` - Raw HTML content of the detail page
/// * `base_url` - Site host used to resolve the relative flag image path
///
/// # Returns
/// * `Ok(MovieDetail)` - missing markup leaves the matching field empty
/// * `Err(FilmaffinityError::ParseError)` only if a built-in selector is invalid
pub fn parse_movie_detail(html: &str, base_url: &str) -> Result<MovieDetail> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let title = first_text(&root, &selector("#main-title span[itemprop='name']")?);

    let year = labeled_text(&document, YEAR_LABELS, "dd[itemprop='datePublished']")?;
    let duration = labeled_text(&document, DURATION_LABELS, "dd[itemprop='duration']")?;

    let flag_selector = selector("#country-img img.nflag")?;
    let country = first_attr(&root, &flag_selector, "alt");
    let country_flag_image_url = first_attr(&root, &flag_selector, "src")
        .filter(|src| !src.is_empty())
        .map(|src| resolve_site_url(base_url, &src));

    let director = extract_director(&document)?;
    let genres = extract_genres(&document)?;
    let cast = extract_cast(&document)?;

    let synopsis = labeled_text(&document, SYNOPSIS_LABELS, "dd[itemprop='description']")?;

    let image_url = first_attr(
        &root,
        &selector("#movie-main-image-container img[itemprop='image']")?,
        "src",
    );
    let large_image_url = first_attr(
        &root,
        &selector("#movie-main-image-container a.lightbox")?,
        "href",
    );

    let trailers_page_url = extract_trailers_page_url(&document)?;

    Ok(MovieDetail {
        title,
        year,
        duration,
        country,
        country_flag_image_url,
        director,
        genres,
        cast,
        synopsis,
        image_url,
        large_image_url,
        trailers_page_url,
    })
}

/// Text of the description following a labeled term, or empty.
fn labeled_text(document: &Html, labels: &[&str], description: &str) -> Result<String> {
    let description = selector(description)?;
    Ok(labeled_description(document, labels, &description)?
        .map(|dd| element_text(&dd))
        .unwrap_or_default())
}

/// Director names in page order, joined with ", ".
fn extract_director(document: &Html) -> Result<String> {
    let block = selector("dd.directors")?;
    let name = selector("span[itemprop='name']")?;

    let names = labeled_description(document, DIRECTOR_LABELS, &block)?
        .map(|dd| {
            dd.select(&name)
                .map(|el| element_text(&el))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    Ok(names.join(", "))
}

/// Genres in page order.
fn extract_genres(document: &Html) -> Result<Vec<String>> {
    let block = selector("dd.card-genres")?;
    let link = selector("span[itemprop='genre'] a")?;

    Ok(labeled_description(document, GENRE_LABELS, &block)?
        .map(|dd| dd.select(&link).map(|el| element_text(&el)).collect())
        .unwrap_or_default())
}

/// Cast names in page order.
fn extract_cast(document: &Html) -> Result<Vec<String>> {
    let name = selector("dd.card-cast-debug li a[itemprop='url'] div.name[itemprop='name']")?;
    Ok(document.select(&name).map(|el| element_text(&el)).collect())
}

/// Link target of the first navigation tab labeled as trailers.
///
/// Scanning stops at the first matching tab, even if it has no `href`.
fn extract_trailers_page_url(document: &Html) -> Result<String> {
    let tab = selector(".ntabs a")?;

    Ok(document
        .select(&tab)
        .find(|el| {
            let text = element_text(el);
            TRAILERS_TAB_LABELS.iter().any(|label| text.contains(label))
        })
        .and_then(|el| el.value().attr("href"))
        .map(|href| href.trim().to_string())
        .unwrap_or_default())
}
