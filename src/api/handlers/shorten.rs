//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/very/long",
///   "validity": 60,          // optional, minutes
///   "custom_code": "promo1"  // optional
/// }
/// ```
///
/// The response arrives after the configured simulated delay.
///
/// # Errors
///
/// - 400 `validation_error` for a malformed body, a blank/invalid URL, a
///   malformed code or bad validity
/// - 409 `conflict` when the custom code is taken
/// - 409 `limit_reached` when the store is full
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    let link = state.link_service.shorten(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
