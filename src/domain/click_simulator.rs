//! Periodic generator of mock clicks.

use std::sync::Arc;
use std::time::Duration;

use rand::seq::IndexedRandom;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::utils::mock_analytics::{random_location, random_source};

/// Picks a random held link and builds an attributed click for it.
///
/// Returns `None` while the store is empty.
pub async fn simulate_click<R: LinkRepository + ?Sized>(repository: &R) -> Option<ClickEvent> {
    let links = match repository.list().await {
        Ok(links) => links,
        Err(e) => {
            warn!(error = %e, "Click simulator could not list links");
            return None;
        }
    };

    let link = links.choose(&mut rand::rng())?;

    Some(ClickEvent::new(
        link.short_code.clone(),
        Some(random_source()),
        Some(random_location()),
    ))
}

/// Enqueues one simulated click every `interval` until the queue closes.
pub async fn run_click_simulator<R: LinkRepository + ?Sized>(
    repository: Arc<R>,
    click_sender: mpsc::Sender<ClickEvent>,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        if click_sender.is_closed() {
            break;
        }

        let Some(event) = simulate_click(repository.as_ref()).await else {
            continue;
        };

        debug!(code = %event.code, "Simulated click");
        if let Err(e) = click_sender.try_send(event) {
            warn!(error = %e, "Dropping simulated click");
        }
    }

    info!("Click simulator stopped");
}
