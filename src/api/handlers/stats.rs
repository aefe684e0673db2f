//! Handlers for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::{LinkStatsResponse, StatsOverviewResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Overview of all held links.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// Totals (links, clicks, active links) plus per-link statistics, newest first.
pub async fn stats_overview_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsOverviewResponse>, AppError> {
    let overview = state.stats_service.get_overview().await?;

    Ok(Json(overview.into()))
}

/// Statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkStatsResponse>, AppError> {
    let stats = state.stats_service.get_link_stats(&code).await?;

    Ok(Json(stats.into()))
}
