#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use shortlink_demo::application::services::LinkSettings;
use shortlink_demo::domain::click_event::ClickEvent;
use shortlink_demo::infrastructure::persistence::InMemoryLinkRepository;
use shortlink_demo::state::AppState;
use tokio::sync::mpsc;

pub const BASE_URL: &str = "http://sho.rt";
pub const MAX_LINKS: usize = 5;

pub fn test_settings() -> LinkSettings {
    LinkSettings {
        base_url: BASE_URL.to_string(),
        default_validity_minutes: 30,
        simulated_delay: Duration::ZERO,
    }
}

pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<InMemoryLinkRepository>,
) {
    let repository = Arc::new(InMemoryLinkRepository::new(MAX_LINKS));
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(repository.clone(), tx, test_settings());

    (state, rx, repository)
}

pub async fn create_test_link(state: &AppState, url: &str, code: &str) {
    let input = shortlink_demo::application::services::ShortenInput {
        url: url.to_string(),
        validity_minutes: None,
        custom_code: Some(code.to_string()),
    };
    state
        .link_service
        .shorten(input)
        .await
        .unwrap_or_else(|e| panic!("failed to seed {code}: {e}"));
}

pub fn shorten_body(url: &str, code: &str) -> serde_json::Value {
    json!({ "url": url, "custom_code": code })
}
