//! Derived statistics views over held links.

use chrono::{DateTime, Utc};

use super::link::Link;

/// Number of clicks shown in a link's recent activity list.
pub const RECENT_CLICK_LIMIT: usize = 8;

/// Aggregate numbers for the statistics page header plus per-link details.
#[derive(Debug, Clone)]
pub struct StatsOverview {
    pub total_links: usize,
    pub total_clicks: u64,
    pub active_links: usize,
    /// Newest first.
    pub links: Vec<LinkStats>,
}

/// Per-link statistics evaluated at a fixed instant.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub expired: bool,
    pub clicks_per_hour: f64,
    /// Newest first, at most [`RECENT_CLICK_LIMIT`] entries.
    pub recent_clicks: Vec<ClickActivity>,
}

/// A click as displayed, with attribution always resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickActivity {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

/// Click rate over the link's age in whole hours, never dividing by less than 1.
///
/// A link younger than two hours divides by 1, so its rate equals its count.
pub fn clicks_per_hour(click_count: u64, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let hours = (now - created_at).num_hours().max(1);
    click_count as f64 / hours as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_clicks_per_hour_fresh_link() {
        let now = Utc::now();
        assert_eq!(clicks_per_hour(4, now, now), 4.0);
        assert_eq!(clicks_per_hour(4, now - Duration::minutes(119), now), 4.0);
    }

    #[test]
    fn test_clicks_per_hour_uses_whole_hours() {
        let now = Utc::now();
        let created = now - Duration::minutes(150);
        assert_eq!(clicks_per_hour(10, created, now), 5.0);
    }

    #[test]
    fn test_clicks_per_hour_zero_clicks() {
        let now = Utc::now();
        assert_eq!(clicks_per_hour(0, now - Duration::hours(10), now), 0.0);
    }

    #[test]
    fn test_clicks_per_hour_clock_skew() {
        let now = Utc::now();
        assert_eq!(clicks_per_hour(3, now + Duration::hours(2), now), 3.0);
    }
}
