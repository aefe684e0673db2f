//! Statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::views::StatsView;

/// Template for the statistics page.
///
/// Renders `templates/statistics.html`. `stats` is `None` while no link is
/// held, which renders the empty state.
#[derive(Template, WebTemplate)]
#[template(path = "statistics.html")]
pub struct StatisticsTemplate {
    pub current_page: &'static str,
    pub stats: Option<StatsView>,
}

/// Renders the statistics page.
///
/// # Endpoint
///
/// `GET /statistics`
pub async fn statistics_page(
    State(state): State<AppState>,
) -> Result<StatisticsTemplate, AppError> {
    info!(page = "statistics", "Navigation to page");

    let overview = state.stats_service.get_overview().await?;
    let stats = (overview.total_links > 0).then(|| StatsView::from(overview));

    Ok(StatisticsTemplate {
        current_page: "statistics",
        stats,
    })
}
