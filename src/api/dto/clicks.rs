//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Click, ClickActivity};

/// Individual click as stored.
///
/// Optional fields are omitted from JSON when `None` for cleaner responses.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.timestamp,
            source: click.source,
            location: click.location,
        }
    }
}

/// Click as displayed in recent activity, attribution always present.
#[derive(Debug, Serialize)]
pub struct ClickActivityInfo {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

impl From<ClickActivity> for ClickActivityInfo {
    fn from(activity: ClickActivity) -> Self {
        Self {
            timestamp: activity.timestamp,
            source: activity.source,
            location: activity.location,
        }
    }
}

/// Optional attribution for a simulated click.
#[derive(Debug, Default, Deserialize)]
pub struct ClickRequest {
    pub source: Option<String>,
    pub location: Option<String>,
}

/// Acknowledgement that a click was queued.
#[derive(Debug, Serialize)]
pub struct ClickAccepted {
    pub short_code: String,
    pub queued: bool,
}
