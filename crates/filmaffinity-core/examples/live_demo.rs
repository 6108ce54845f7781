use filmaffinity_core::{FilmaffinityScraper, Language};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "Origen".to_string());
    let language: Language = std::env::args()
        .nth(2)
        .map(|code| code.parse::<Language>())
        .transpose()?
        .unwrap_or_default();

    let mut scraper = FilmaffinityScraper::new()?;
    scraper.set_language(language);

    println!("Searching '{}' ({})...\n", query, scraper.language());
    let results = scraper.search(&query).await?;

    println!("Found {} results:", results.len());
    for (i, item) in results.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, item.title, item.detail_page_url);
    }

    let Some(first) = results.iter().find(|r| !r.detail_page_url.is_empty()) else {
        return Ok(());
    };

    let movie = scraper.movie(&first.detail_page_url).await?;
    println!("\n{}", serde_json::to_string_pretty(&movie)?);

    if !movie.trailers_page_url.is_empty() {
        let trailers = scraper.trailers(&movie.trailers_page_url).await?;
        println!("\nTrailers ({}):", trailers.len());
        for trailer in &trailers {
            println!(
                "  #{} {} {}",
                trailer.sequence_number.as_deref().unwrap_or("-"),
                trailer.title,
                trailer.embed_url.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}
