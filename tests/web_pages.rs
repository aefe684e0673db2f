mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use shortlink_demo::domain::click_event::ClickEvent;
use shortlink_demo::routes::router;
use shortlink_demo::state::AppState;
use tokio::sync::mpsc;

struct Harness {
    server: TestServer,
    state: AppState,
    _clicks: mpsc::Receiver<ClickEvent>,
}

fn harness() -> Harness {
    let (state, rx, _repo) = common::create_test_state();
    Harness {
        server: TestServer::new(router(state.clone())).unwrap(),
        state,
        _clicks: rx,
    }
}

#[tokio::test]
async fn test_shortener_page_renders_form() {
    let Harness { server, _clicks, .. } = harness();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Shorten URL"));
    assert!(html.contains("Statistics"));
    assert!(html.contains(r#"name="custom_code""#));
    assert!(!html.contains("Recently Created"));
    assert!(!html.contains(" disabled"));
}

#[tokio::test]
async fn test_form_submit_success_resets_form() {
    let Harness { server, state, _clicks } = harness();

    let response = server
        .post("/")
        .form(&json!({
            "url": "https://example.com/docs",
            "validity": "45min",
            "custom_code": "docs1"
        }))
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Success! Your short URL: http://sho.rt/docs1"));
    assert!(html.contains("Recently Created"));
    assert!(html.contains(r#"value="""#));

    let link = state.link_service.get_link_by_code("docs1").await.unwrap();
    assert_eq!(link.validity_minutes, 45);
}

#[tokio::test]
async fn test_form_submit_blank_validity_uses_default() {
    let Harness { server, state, _clicks } = harness();

    server
        .post("/")
        .form(&json!({ "url": "https://example.com", "validity": "", "custom_code": "" }))
        .await
        .assert_status_ok();

    let links = state.link_service.list_links().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].validity_minutes, 30);
    assert_eq!(links[0].short_code.len(), 6);
}

#[tokio::test]
async fn test_form_submit_error_keeps_values() {
    let Harness { server, state, _clicks } = harness();

    let response = server
        .post("/")
        .form(&json!({
            "url": "example.com",
            "validity": "60",
            "custom_code": "keepme"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let html = response.text();
    assert!(html.contains("Please enter a valid URL (must start with http:// or https://)"));
    assert!(html.contains(r#"value="example.com""#));
    assert!(html.contains(r#"value="keepme""#));
    assert!(state.link_service.list_links().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_form_submit_negative_validity_is_rejected() {
    let Harness { server, _clicks, .. } = harness();

    let response = server
        .post("/")
        .form(&json!({ "url": "https://example.com", "validity": "-5", "custom_code": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response
            .text()
            .contains("Validity must be between 1 and 10,080 minutes (1 week)")
    );
}

#[tokio::test]
async fn test_limit_notice_disables_submit() {
    let Harness { server, state, _clicks } = harness();
    for i in 0..common::MAX_LINKS {
        common::create_test_link(&state, "https://example.com", &format!("code{i}")).await;
    }

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("You've reached the maximum of 5 concurrent URLs."));
    assert!(!html.contains("Maximum of 5 concurrent URLs allowed"));
    assert!(html.contains(" disabled"));
    // Only the three newest appear under "Recently Created".
    assert!(html.contains("http://sho.rt/code4"));
    assert!(html.contains("http://sho.rt/code2"));
    assert!(!html.contains("http://sho.rt/code1"));
}

#[tokio::test]
async fn test_form_submit_over_limit_shows_error_and_notice() {
    let Harness { server, state, _clicks } = harness();
    for i in 0..common::MAX_LINKS {
        common::create_test_link(&state, "https://example.com", &format!("code{i}")).await;
    }

    let response = server
        .post("/")
        .form(&json!({ "url": "https://example.com/more", "validity": "", "custom_code": "" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let html = response.text();
    assert_eq!(html.matches("Maximum of 5 concurrent URLs allowed").count(), 1);
    assert!(html.contains("You've reached the maximum of 5 concurrent URLs."));
}

#[tokio::test]
async fn test_statistics_empty_state() {
    let Harness { server, _clicks, .. } = harness();

    let response = server.get("/statistics").await;

    response.assert_status_ok();
    assert!(response.text().contains("No URLs to analyze yet"));
}

#[tokio::test]
async fn test_statistics_lists_links() {
    let Harness { server, state, _clicks } = harness();
    common::create_test_link(&state, "https://example.com/stats", "stats1").await;

    let response = server.get("/statistics").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(!html.contains("No URLs to analyze yet"));
    assert!(html.contains("http://sho.rt/stats1"));
    assert!(html.contains("https://example.com/stats"));
    assert!(html.contains("Clicks per hour: <strong>0.0</strong>"));
    assert!(html.contains("Active"));
}

#[tokio::test]
async fn test_api_is_nested() {
    let Harness { server, _clicks, .. } = harness();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    server.get("/health").await.assert_status_ok();
}
