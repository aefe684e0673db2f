//! Background worker that records queued click events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Drains the click queue until every sender is dropped.
///
/// Events for unknown codes are logged and skipped.
pub async fn run_click_worker<R: LinkRepository + ?Sized>(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<R>,
) {
    while let Some(event) = rx.recv().await {
        let code = event.code.clone();

        match repository.record_click(event.into()).await {
            Ok(click) => debug!(code = %code, at = %click.timestamp, "Click recorded"),
            Err(e) => warn!(code = %code, error = %e, "Failed to record click"),
        }
    }

    info!("Click queue closed, worker stopped");
}
