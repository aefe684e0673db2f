//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

use super::clicks::ClickInfo;
use crate::application::services::ShortenInput;
use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// An empty `custom_code` is treated as absent.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// A missing URL is treated as blank.
    #[serde(default)]
    pub url: String,

    /// Validity window in minutes (default: configured, usually 30).
    #[serde(default)]
    pub validity: Option<i64>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub custom_code: Option<String>,
}

impl From<ShortenRequest> for ShortenInput {
    fn from(req: ShortenRequest) -> Self {
        ShortenInput {
            url: req.url,
            validity_minutes: req.validity,
            custom_code: req.custom_code,
        }
    }
}

/// JSON representation of a held link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub validity_minutes: i64,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub expired: bool,
    pub click_count: u64,
    pub clicks: Vec<ClickInfo>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            expired: link.is_expired(),
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            short_url: link.short_url,
            validity_minutes: link.validity_minutes,
            expires_at: link.expires_at,
            created_at: link.created_at,
            click_count: link.click_count,
            clicks: link.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
