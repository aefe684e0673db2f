//! Handlers for listing links and queueing simulated clicks.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tokio::sync::mpsc::error::TrySendError;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::api::dto::clicks::{ClickAccepted, ClickRequest};
use crate::api::dto::shorten::LinkResponse;
use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Lists held links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Queues a simulated click for a link.
///
/// # Endpoint
///
/// `POST /api/links/{code}/clicks`
///
/// # Request Body
///
/// ```json
/// { "source": "Email", "location": "London, UK" }  // body and both fields optional
/// ```
///
/// The click is recorded asynchronously by the click worker. When the queue
/// is full the click is dropped and `queued` is `false`.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body.
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error once the click worker has stopped.
pub async fn click_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    payload: Result<Option<Json<ClickRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<ClickAccepted>), AppError> {
    let Json(payload) = payload?.unwrap_or_default();
    let link = state.link_service.get_link_by_code(&code).await?;

    let event = ClickEvent::new(
        link.short_code.clone(),
        payload.source.as_deref(),
        payload.location.as_deref(),
    );

    let queued = match state.click_sender.try_send(event) {
        Ok(()) => {
            debug!(code = %link.short_code, "Click queued");
            true
        }
        Err(TrySendError::Full(_)) => {
            warn!(code = %link.short_code, "Click queue full, dropping click");
            false
        }
        Err(TrySendError::Closed(_)) => {
            error!(code = %link.short_code, "Click queue closed, click worker is gone");
            return Err(AppError::internal(
                "Click tracking is unavailable",
                json!({ "code": link.short_code }),
            ));
        }
    };

    Ok((
        StatusCode::ACCEPTED,
        Json(ClickAccepted {
            short_code: link.short_code,
            queued,
        }),
    ))
}
