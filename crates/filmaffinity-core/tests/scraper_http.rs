//! End-to-end tests against a local mock of the FilmAffinity site.

use filmaffinity_core::{
    ClientConfig, FilmaffinityError, FilmaffinityScraper, Language, ScraperConfig,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MOVIE_ORIGEN: &str = include_str!("fixtures/movie_origen.html");
const MOVIE_INCEPTION: &str = include_str!("fixtures/movie_inception.html");
const TRAILERS: &str = include_str!("fixtures/trailers.html");
const SEARCH_ES: &str = include_str!("fixtures/search_es.html");
const SEARCH_EN: &str = include_str!("fixtures/search_en.html");
const EMPTY_PAGE: &str = "<html><body><p>Sin resultados</p></body></html>";

fn scraper_for(server: &MockServer) -> FilmaffinityScraper {
    let config = ScraperConfig {
        client: ClientConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            ..ClientConfig::default()
        },
        language: Language::Es,
    };
    FilmaffinityScraper::with_config(config).unwrap()
}

async fn mount_page(server: &MockServer, page_path: &str, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_movie_detail_full_page() {
    let server = MockServer::start().await;
    let trailers_url = format!("{}/es/evideos.php", server.uri());
    mount_page(
        &server,
        "/es/film971380.html",
        MOVIE_ORIGEN.replace("TRAILERS_URL", &trailers_url),
    )
    .await;

    let scraper = scraper_for(&server);
    let url = format!("{}/es/film971380.html", server.uri());
    let movie = scraper.get_movie_detail(&url).await.unwrap();

    assert_eq!(movie.title, "Origen");
    assert_eq!(movie.year, "2010");
    assert_eq!(movie.duration, "148 min.");
    assert_eq!(movie.country.as_deref(), Some("Estados Unidos"));
    assert_eq!(
        movie.country_flag_image_url,
        Some(format!("{}/imgs/countries2/US.png", server.uri()))
    );
    assert_eq!(movie.director, "Christopher Nolan");
    assert_eq!(movie.genres, vec!["Ciencia ficción"]);
    assert_eq!(movie.cast, vec!["Leonardo DiCaprio", "Elliot Page"]);
    assert_eq!(
        movie.synopsis,
        "Dom Cobb es un ladrón experto en el arte de la extracción."
    );
    assert_eq!(movie.trailers_page_url, trailers_url);
}

#[tokio::test]
async fn test_movie_without_country_or_trailers_tab() {
    let server = MockServer::start().await;
    mount_page(&server, "/es/film971380.html", MOVIE_INCEPTION).await;

    let scraper = scraper_for(&server);
    let movie = scraper.movie_by_id(971380).await.unwrap();

    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.year, "2010");
    assert_eq!(movie.country, None);
    assert_eq!(movie.country_flag_image_url, None);
    assert_eq!(movie.genres, vec!["Ciencia ficción", "Thriller"]);
    assert_eq!(movie.cast, vec!["Leonardo DiCaprio", "Tom Hardy"]);
    assert_eq!(movie.trailers_page_url, "");
}

#[tokio::test]
async fn test_movie_extraction_is_deterministic() {
    let server = MockServer::start().await;
    mount_page(&server, "/es/film971380.html", MOVIE_INCEPTION).await;

    let scraper = scraper_for(&server);
    let url = format!("{}/es/film971380.html", server.uri());
    let first = scraper.movie(&url).await.unwrap();
    let second = scraper.movie(&url).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_movie_not_found_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/es/film1.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let url = format!("{}/es/film1.html", server.uri());

    match scraper.movie(&url).await {
        Err(FilmaffinityError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("Expected Status error, got {:?}", other),
    }
    assert!(scraper.get_movie_detail(&url).await.is_none());
}

#[tokio::test]
async fn test_trailers_in_document_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/es/evideos.php", TRAILERS).await;

    let scraper = scraper_for(&server);
    let url = format!("{}/es/evideos.php", server.uri());
    let trailers = scraper.get_trailers(&url).await.unwrap();

    assert_eq!(trailers.len(), 2);
    assert_eq!(trailers[0].id.as_deref(), Some("9001"));
    assert_eq!(trailers[0].sequence_number.as_deref(), Some("1"));
    assert_eq!(trailers[0].title, "Tráiler 1");
    assert_eq!(
        trailers[0].embed_url.as_deref(),
        Some("https://www.youtube.com/embed/YoHD9XEInc0")
    );
    assert_eq!(trailers[1].id.as_deref(), Some("9002"));
    assert_eq!(trailers[1].title, "Tráiler 2");
}

#[tokio::test]
async fn test_trailers_empty_page_vs_failed_fetch() {
    let server = MockServer::start().await;
    mount_page(&server, "/es/evideos.php", EMPTY_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/es/broken.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);

    let empty = scraper
        .get_trailers(&format!("{}/es/evideos.php", server.uri()))
        .await;
    assert_eq!(empty, Some(Vec::new()));

    let failed = scraper
        .get_trailers(&format!("{}/es/broken.php", server.uri()))
        .await;
    assert_eq!(failed, None);
}

#[tokio::test]
async fn test_unreachable_host_is_absent() {
    let server = MockServer::start().await;
    let scraper = scraper_for(&server);

    assert!(scraper
        .get_movie_detail("http://127.0.0.1:1/es/film1.html")
        .await
        .is_none());
    assert!(scraper
        .get_trailers("http://127.0.0.1:1/es/evideos.php")
        .await
        .is_none());
}

#[tokio::test]
async fn test_search_builds_encoded_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/es/search.php"))
        .and(query_param("stype", "title"))
        .and(query_param("stext", "el año & más"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_ES))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let results = scraper.search_by_title("el año & más").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Origen");
    assert_eq!(results[0].film_id, Some(971380));
    assert_eq!(
        results[0].thumbnail_url.as_deref(),
        Some("https://pics.filmaffinity.com/origen-msmall.jpg")
    );
    assert_eq!(
        results[0].country_flag_image_url,
        Some(format!("{}/imgs/countries2/US.png", server.uri()))
    );
}

#[tokio::test]
async fn test_search_follows_language_at_call_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en/search.php"))
        .and(query_param("stext", "Inception"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_EN))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/es/search.php"))
        .and(query_param("stext", "Inception"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_ES))
        .expect(1)
        .mount(&server)
        .await;

    let mut scraper = scraper_for(&server);

    scraper.set_language(Language::En);
    let english = scraper.search("Inception").await.unwrap();
    assert_eq!(english.len(), 2);
    assert_eq!(english[0].title, "Inception");
    assert_eq!(english[1].title, "Inception: The Cobol Job");

    scraper.set_language(Language::Es);
    let spanish = scraper.search("Inception").await.unwrap();
    assert_eq!(spanish.len(), 1);
    assert_eq!(spanish[0].title, "Origen");
}

#[tokio::test]
async fn test_search_in_does_not_touch_language_setting() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mx/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_ES))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let results = scraper.search_in("Origen", Language::Mx).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(scraper.language(), Language::Es);
}

#[tokio::test]
async fn test_search_no_match_and_failure_look_the_same() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/es/search.php"))
        .and(query_param("stext", "zzzz"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/es/search.php"))
        .and(query_param("stext", "broken"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);

    assert!(scraper.search_by_title("zzzz").await.is_empty());
    assert!(scraper.search_by_title("broken").await.is_empty());

    assert!(scraper.search("zzzz").await.unwrap().is_empty());
    assert!(matches!(
        scraper.search("broken").await,
        Err(FilmaffinityError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_search_unreachable_host_is_empty() {
    let config = ScraperConfig {
        client: ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 5,
            ..ClientConfig::default()
        },
        language: Language::En,
    };
    let scraper = FilmaffinityScraper::with_config(config).unwrap();

    assert!(scraper.search_by_title("Inception").await.is_empty());
    let err = scraper.search("Inception").await.unwrap_err();
    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_search_by_title_in_failure_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mx/search.php"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let results = scraper.search_by_title_in("Origen", Language::Mx).await;

    assert!(results.is_empty());
    assert_eq!(scraper.language(), Language::Es);
}

#[tokio::test]
async fn test_search_by_title_in_uses_given_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/en/search.php"))
        .and(query_param("stext", "Inception"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_EN))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let results = scraper.search_by_title_in("Inception", Language::En).await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Inception");
}

#[tokio::test]
async fn test_search_sends_query_untrimmed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/es/search.php"))
        .and(query_param("stext", "  Origen "))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_ES))
        .expect(1)
        .mount(&server)
        .await;

    let scraper = scraper_for(&server);
    let results = scraper.search("  Origen ").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Origen");
}
