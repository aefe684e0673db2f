//! Click entity representing a single (simulated) visit of a short link.

use chrono::{DateTime, Utc};

/// A click recorded against a link.
///
/// Source and location are optional: clicks submitted without attribution
/// get a mock value drawn at display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    pub source: Option<String>,
    pub location: Option<String>,
}

impl Click {
    pub fn new(timestamp: DateTime<Utc>, source: Option<String>, location: Option<String>) -> Self {
        Self {
            timestamp,
            source,
            location,
        }
    }
}

/// Input data for recording a click.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub short_code: String,
    pub source: Option<String>,
    pub location: Option<String>,
}
