//! Click event model for asynchronous click tracking.

use crate::domain::entities::NewClick;

/// A click waiting in the queue for the background worker.
///
/// Produced by the click API handler and by the click simulator, consumed by
/// [`crate::domain::click_worker::run_click_worker`]. The timestamp is taken
/// when the worker records the event.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub source: Option<String>,
    pub location: Option<String>,
}

impl ClickEvent {
    pub fn new(code: String, source: Option<&str>, location: Option<&str>) -> Self {
        Self {
            code,
            source: source.map(|s| s.to_string()),
            location: location.map(|s| s.to_string()),
        }
    }
}

impl From<ClickEvent> for NewClick {
    fn from(event: ClickEvent) -> Self {
        NewClick {
            short_code: event.code,
            source: event.source,
            location: event.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_creation_full() {
        let event = ClickEvent::new("abc123".to_string(), Some("Email"), Some("London, UK"));

        assert_eq!(event.code, "abc123");
        assert_eq!(event.source, Some("Email".to_string()));
        assert_eq!(event.location, Some("London, UK".to_string()));
    }

    #[test]
    fn test_click_event_into_new_click() {
        let event = ClickEvent::new("xyz".to_string(), None, Some("Berlin, Germany"));
        let new_click: NewClick = event.into();

        assert_eq!(new_click.short_code, "xyz");
        assert!(new_click.source.is_none());
        assert_eq!(new_click.location.as_deref(), Some("Berlin, Germany"));
    }
}
