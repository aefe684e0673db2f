//! Display-ready view models for the HTML templates.
//!
//! Templates stay logic-free: timestamps and rates are formatted here.

use chrono::{DateTime, Utc};

use crate::domain::entities::{ClickActivity, Link, LinkStats, StatsOverview};

/// Number of links shown under "Recently Created" on the shortener page.
pub const RECENT_LINKS_SHOWN: usize = 3;

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// A compact link card on the shortener page.
#[derive(Debug, Clone)]
pub struct LinkCard {
    pub short_url: String,
    pub original_url: String,
    pub expires_at: String,
    pub click_count: u64,
}

impl From<&Link> for LinkCard {
    fn from(link: &Link) -> Self {
        Self {
            short_url: link.short_url.clone(),
            original_url: link.original_url.clone(),
            expires_at: format_timestamp(link.expires_at),
            click_count: link.click_count,
        }
    }
}

/// Cards for the newest links, newest first.
pub fn recent_cards(links: &[Link]) -> Vec<LinkCard> {
    links
        .iter()
        .take(RECENT_LINKS_SHOWN)
        .map(LinkCard::from)
        .collect()
}

#[derive(Debug, Clone)]
pub struct StatsView {
    pub total_links: usize,
    pub total_clicks: u64,
    pub active_links: usize,
    pub links: Vec<LinkStatsView>,
}

impl From<StatsOverview> for StatsView {
    fn from(overview: StatsOverview) -> Self {
        Self {
            total_links: overview.total_links,
            total_clicks: overview.total_clicks,
            active_links: overview.active_links,
            links: overview.links.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinkStatsView {
    pub short_url: String,
    pub original_url: String,
    pub created_at: String,
    pub expires_at: String,
    pub expired: bool,
    pub click_count: u64,
    pub clicks_per_hour: String,
    pub recent_clicks: Vec<ClickView>,
}

impl From<LinkStats> for LinkStatsView {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_url: stats.link.short_url,
            original_url: stats.link.original_url,
            created_at: format_timestamp(stats.link.created_at),
            expires_at: format_timestamp(stats.link.expires_at),
            expired: stats.expired,
            click_count: stats.link.click_count,
            clicks_per_hour: format!("{:.1}", stats.clicks_per_hour),
            recent_clicks: stats.recent_clicks.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClickView {
    pub timestamp: String,
    pub source: String,
    pub location: String,
}

impl From<ClickActivity> for ClickView {
    fn from(activity: ClickActivity) -> Self {
        Self {
            timestamp: format_timestamp(activity.timestamp),
            source: activity.source,
            location: activity.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn link(id: i64) -> Link {
        Link::new(
            id,
            format!("https://example.com/{id}"),
            format!("code{id}"),
            format!("http://localhost:3000/code{id}"),
            30,
            Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(ts), "2026-01-02 03:04:05 UTC");
    }

    #[test]
    fn test_recent_cards_keeps_newest_three() {
        let links: Vec<Link> = (1..=5).rev().map(link).collect();

        let cards = recent_cards(&links);

        assert_eq!(cards.len(), 3);
        assert!(cards[0].short_url.ends_with("code5"));
        assert!(cards[2].short_url.ends_with("code3"));
        assert_eq!(cards[0].expires_at, "2026-01-02 03:34:05 UTC");
    }

    #[test]
    fn test_link_stats_view_rate_has_one_decimal() {
        let stats = LinkStats {
            link: link(1),
            expired: true,
            clicks_per_hour: 2.0 / 3.0,
            recent_clicks: Vec::new(),
        };

        let view = LinkStatsView::from(stats);

        assert_eq!(view.clicks_per_hour, "0.7");
        assert!(view.expired);
    }
}
