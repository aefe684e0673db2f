//! Browser page route configuration.

use crate::state::AppState;
use crate::web::handlers::{shorten_form_handler, shortener_page, statistics_page};
use axum::{Router, routing::get};

/// HTML page routes.
///
/// # Endpoints
///
/// - `GET /` - Shortener form with the most recent links
/// - `POST /` - Form submission
/// - `GET /statistics` - Statistics for every held link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shortener_page).post(shorten_form_handler))
        .route("/statistics", get(statistics_page))
}
