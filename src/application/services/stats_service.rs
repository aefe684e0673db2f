//! Click statistics and analytics service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{
    ClickActivity, Link, LinkStats, RECENT_CLICK_LIMIT, StatsOverview, clicks_per_hour,
};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::mock_analytics::{random_location, random_source};

/// Service computing statistics over held links.
///
/// Expiry and click rates are evaluated against the current time on every
/// call; nothing is cached.
pub struct StatsService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> StatsService<L> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Overview of every held link, newest first.
    pub async fn get_overview(&self) -> Result<StatsOverview, AppError> {
        let links = self.repository.list().await?;
        Ok(build_overview(links, Utc::now()))
    }

    /// Statistics for a single link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link holds the code.
    pub async fn get_link_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Statistics not found", json!({ "code": code })))?;

        Ok(build_link_stats(link, Utc::now()))
    }
}

/// Aggregates totals and per-link statistics at `now`.
pub fn build_overview(links: Vec<Link>, now: DateTime<Utc>) -> StatsOverview {
    let total_links = links.len();
    let total_clicks = links.iter().map(|l| l.click_count).sum();
    let active_links = links.iter().filter(|l| !l.is_expired_at(now)).count();

    StatsOverview {
        total_links,
        total_clicks,
        active_links,
        links: links
            .into_iter()
            .map(|link| build_link_stats(link, now))
            .collect(),
    }
}

/// Computes one link's statistics at `now`.
///
/// Recent activity holds the last [`RECENT_CLICK_LIMIT`] clicks, newest
/// first. Missing attribution is filled with a mock source/location.
pub fn build_link_stats(link: Link, now: DateTime<Utc>) -> LinkStats {
    let recent_clicks = link
        .clicks
        .iter()
        .rev()
        .take(RECENT_CLICK_LIMIT)
        .map(|click| ClickActivity {
            timestamp: click.timestamp,
            source: click
                .source
                .clone()
                .unwrap_or_else(|| random_source().to_string()),
            location: click
                .location
                .clone()
                .unwrap_or_else(|| random_location().to_string()),
        })
        .collect();

    LinkStats {
        expired: link.is_expired_at(now),
        clicks_per_hour: clicks_per_hour(link.click_count, link.created_at, now),
        recent_clicks,
        link,
    }
}
