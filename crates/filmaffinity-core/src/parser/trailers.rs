//! Trailers page parser for FilmAffinity
//!
//! Every `.evideo-box` container becomes one [`Trailer`], in document order.

use scraper::Html;

use crate::error::Result;
use crate::types::Trailer;

use super::{first_attr, first_text, selector};

/// Parse all trailers on a trailers page.
///
/// A page without trailer containers yields an empty vector.
pub fn parse_trailers(html: &str) -> Result<Vec<Trailer>> {
    let document = Html::parse_document(html);

    let container = selector(".evideo-box")?;
    let title = selector(".video-title strong")?;
    let frame = selector("iframe")?;

    let trailers = document
        .select(&container)
        .map(|el| Trailer {
            id: el.value().attr("data-evideo-id").map(|v| v.trim().to_string()),
            sequence_number: el.value().attr("data-evideo-num").map(|v| v.trim().to_string()),
            title: first_text(&el, &title),
            embed_url: first_attr(&el, &frame, "src"),
        })
        .collect();

    Ok(trailers)
}
