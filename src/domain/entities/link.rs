//! Link entity representing a shortened URL held in memory.

use chrono::{DateTime, Duration, Utc};

use super::click::Click;

/// A shortened URL with its validity window and recorded clicks.
///
/// Links live for the lifetime of the process. They are never deleted, and
/// expiry is informational only: an expired link is still listed and can
/// still receive clicks.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub validity_minutes: i64,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub click_count: u64,
    /// Oldest first.
    pub clicks: Vec<Click>,
}

impl Link {
    /// Builds a fresh link with no clicks.
    ///
    /// `expires_at` is derived from `created_at` and `validity_minutes`.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        short_url: String,
        validity_minutes: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            short_url,
            validity_minutes,
            expires_at: created_at + Duration::minutes(validity_minutes),
            created_at,
            click_count: 0,
            clicks: Vec::new(),
        }
    }

    /// Returns true once `now` has reached the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Appends a click and keeps `click_count` in step with `clicks`.
    pub fn push_click(&mut self, click: Click) {
        self.clicks.push(click);
        self.click_count = self.clicks.len() as u64;
    }

    /// Case-insensitive short code comparison.
    pub fn has_code(&self, code: &str) -> bool {
        self.short_code.eq_ignore_ascii_case(code)
    }
}

/// Input data for inserting a new link into the store.
///
/// The store assigns the identifier and the creation timestamp.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub validity_minutes: i64,
}
