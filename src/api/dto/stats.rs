//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickActivityInfo;
use crate::domain::entities::{LinkStats, StatsOverview};

/// Overview of all held links.
#[derive(Debug, Serialize)]
pub struct StatsOverviewResponse {
    pub total_links: usize,
    pub total_clicks: u64,
    pub active_links: usize,
    pub items: Vec<LinkStatsResponse>,
}

impl From<StatsOverview> for StatsOverviewResponse {
    fn from(overview: StatsOverview) -> Self {
        Self {
            total_links: overview.total_links,
            total_clicks: overview.total_clicks,
            active_links: overview.active_links,
            items: overview.links.into_iter().map(Into::into).collect(),
        }
    }
}

/// Statistics for a single link.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expired: bool,
    pub click_count: u64,
    /// Rounded to one decimal place.
    pub clicks_per_hour: f64,
    pub recent_clicks: Vec<ClickActivityInfo>,
}

impl From<LinkStats> for LinkStatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_code: stats.link.short_code,
            short_url: stats.link.short_url,
            original_url: stats.link.original_url,
            created_at: stats.link.created_at,
            expires_at: stats.link.expires_at,
            expired: stats.expired,
            click_count: stats.link.click_count,
            clicks_per_hour: (stats.clicks_per_hour * 10.0).round() / 10.0,
            recent_clicks: stats.recent_clicks.into_iter().map(Into::into).collect(),
        }
    }
}
