//! API route configuration.

use crate::api::handlers::{
    click_handler, list_links_handler, shorten_handler, stats_handler, stats_overview_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten`               - Create a short link
/// - `GET  /links`                 - List held links
/// - `POST /links/{code}/clicks`   - Queue a simulated click
/// - `GET  /stats`                 - Overview statistics
/// - `GET  /stats/{code}`          - Statistics for one link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{code}/clicks", post(click_handler))
        .route("/stats", get(stats_overview_handler))
        .route("/stats/{code}", get(stats_handler))
}
