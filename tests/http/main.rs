//! HTTP page fetcher integration tests.
//!
//! Starts an axum server that mimics the card API and points the real
//! `HttpPageFetcher` at it.

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use card_catalog::{
    CatalogConfig, CatalogController, FetchError, HttpPageFetcher, PageFetcher, PageOutcome,
    PageRequest, RecordingSink,
};
use serde_json::{json, Value};

const NAMES: [&str; 6] = [
    "Abra",
    "Bulbasaur",
    "Charmander",
    "Ditto",
    "Eevee",
    "Farfetch'd",
];

fn card_json(index: usize) -> Value {
    json!({
        "id": format!("base1-{}", index + 1),
        "name": NAMES[index],
        "number": (index + 1).to_string(),
        "imageUrl": format!("https://images.example/base1/{}.png", index + 1),
        "supertype": "Pokémon",
        "subtype": "Basic",
        "nationalPokedexNumber": 63,
    })
}

async fn cards_handler(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let size: usize = params
        .get("pageSize")
        .and_then(|p| p.parse().ok())
        .unwrap_or(4);
    let start = (page.saturating_sub(1) * size).min(NAMES.len());
    let end = (start + size).min(NAMES.len());
    let cards: Vec<Value> = (start..end).map(card_json).collect();
    Json(json!({ "cards": cards }))
}

/// Bind to port 0 and return the base URL.
async fn start_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn config(base: String, page_size: u32) -> CatalogConfig {
    CatalogConfig {
        api_base: base,
        page_size,
        ..CatalogConfig::default()
    }
}

#[tokio::test]
async fn fetches_requested_page() {
    let base = start_server(Router::new().route("/v1/cards", get(cards_handler))).await;
    let fetcher = HttpPageFetcher::new(&config(base, 4));

    let cards = fetcher.fetch_page(PageRequest::new(2, 4)).await.unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Eevee");
    assert_eq!(cards[0].id.as_str(), "base1-5");
    assert_eq!(cards[0].attributes.subtype.as_deref(), Some("Basic"));
    assert!(cards[0].attributes.rarity.is_none());
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let app = Router::new().route(
        "/v1/cards",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let base = start_server(app).await;
    let fetcher = HttpPageFetcher::new(&config(base, 4));

    let err = fetcher.fetch_page(PageRequest::new(1, 4)).await.unwrap_err();
    assert_eq!(err, FetchError::Status(503));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let app = Router::new().route("/v1/cards", get(|| async { "not json" }));
    let base = start_server(app).await;
    let fetcher = HttpPageFetcher::new(&config(base, 4));

    let err = fetcher.fetch_page(PageRequest::new(1, 4)).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let fetcher = HttpPageFetcher::new(&config(format!("http://{addr}"), 4));

    let err = fetcher.fetch_page(PageRequest::new(1, 4)).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn controller_pages_through_http() {
    let base = start_server(Router::new().route("/v1/cards", get(cards_handler))).await;
    let config = config(base, 4);
    let mut catalog = CatalogController::new(
        HttpPageFetcher::new(&config),
        RecordingSink::new(),
        config.page_size,
    )
    .unwrap();

    assert_eq!(
        catalog.start().await.unwrap(),
        PageOutcome::Appended { page: 1, count: 4, skipped: vec![] }
    );
    assert_eq!(
        catalog.page_requested().await.unwrap(),
        PageOutcome::Appended { page: 2, count: 2, skipped: vec![] }
    );
    assert_eq!(
        catalog.page_requested().await.unwrap(),
        PageOutcome::Appended { page: 3, count: 0, skipped: vec![] }
    );
    assert_eq!(catalog.store().len(), 6);
    assert!(catalog.is_exhausted());

    let visibility = catalog.query_changed("e");
    // Abra, Bulbasaur and Ditto.
    assert_eq!(visibility.hidden_count(), 3);
}
