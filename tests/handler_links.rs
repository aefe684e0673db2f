mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use shortlink_demo::api::handlers::{click_handler, list_links_handler};
use shortlink_demo::domain::click_worker::run_click_worker;
use shortlink_demo::domain::repositories::LinkRepository;

fn app(state: shortlink_demo::state::AppState) -> Router {
    Router::new()
        .route("/api/links", get(list_links_handler))
        .route("/api/links/{code}/clicks", post(click_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_list_links_empty() {
    let (state, _rx, _repo) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (state, _rx, _repo) = common::create_test_state();
    common::create_test_link(&state, "https://one.example.com", "first").await;
    common::create_test_link(&state, "https://two.example.com", "second").await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["short_code"], "second");
    assert_eq!(items[1]["short_code"], "first");
    assert_eq!(items[1]["short_url"], "http://sho.rt/first");
}

#[tokio::test]
async fn test_click_is_queued() {
    let (state, mut rx, _repo) = common::create_test_state();
    common::create_test_link(&state, "https://example.com", "promo").await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/links/promo/clicks")
        .json(&json!({ "source": "Email", "location": "Berlin, Germany" }))
        .await;

    response.assert_status(StatusCode::ACCEPTED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], "promo");
    assert_eq!(json["queued"], true);

    let event = rx.recv().await.unwrap();
    assert_eq!(event.code, "promo");
    assert_eq!(event.source.as_deref(), Some("Email"));
    assert_eq!(event.location.as_deref(), Some("Berlin, Germany"));
}

#[tokio::test]
async fn test_click_unknown_code() {
    let (state, mut rx, _repo) = common::create_test_state();
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/links/missing/clicks")
        .json(&json!({}))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_click_without_body() {
    let (state, mut rx, _repo) = common::create_test_state();
    common::create_test_link(&state, "https://example.com", "promo").await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server.post("/api/links/promo/clicks").await;

    response.assert_status(StatusCode::ACCEPTED);

    let event = rx.recv().await.unwrap();
    assert!(event.source.is_none());
}

#[tokio::test]
async fn test_click_malformed_body() {
    let (state, _rx, _repo) = common::create_test_state();
    common::create_test_link(&state, "https://example.com", "promo").await;
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/links/promo/clicks")
        .json(&json!({ "source": 42 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_click_when_worker_stopped() {
    let (state, rx, _repo) = common::create_test_state();
    common::create_test_link(&state, "https://example.com", "promo").await;
    drop(rx);
    let server = TestServer::new(app(state)).unwrap();

    let response = server.post("/api/links/promo/clicks").json(&json!({})).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "internal_error"
    );
}

#[tokio::test]
async fn test_clicks_recorded_by_worker() {
    let (state, rx, repo) = common::create_test_state();
    common::create_test_link(&state, "https://example.com", "promo").await;
    let worker = tokio::spawn(run_click_worker(rx, Arc::clone(&repo)));
    let server = TestServer::new(app(state)).unwrap();

    for _ in 0..3 {
        server
            .post("/api/links/promo/clicks")
            .json(&json!({}))
            .await
            .assert_status(StatusCode::ACCEPTED);
    }

    let mut link = repo.find_by_code("promo").await.unwrap().unwrap();
    for _ in 0..100 {
        if link.click_count == 3 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        link = repo.find_by_code("promo").await.unwrap().unwrap();
    }
    worker.abort();

    assert_eq!(link.click_count, 3);
    assert_eq!(link.clicks.len(), 3);
    assert!(link.clicks.iter().all(|c| c.source.is_none()));
}
