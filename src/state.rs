//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, LinkSettings, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::InMemoryLinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<InMemoryLinkRepository>>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    /// Wires both services onto one shared store.
    pub fn new(
        repository: Arc<InMemoryLinkRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
        settings: LinkSettings,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone(), settings)),
            stats_service: Arc::new(StatsService::new(repository)),
            click_sender,
        }
    }
}
