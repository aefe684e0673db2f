//! In-memory repository implementation for links and clicks.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

struct Store {
    next_id: i64,
    /// Newest first.
    links: Vec<Link>,
}

/// Process-local link store.
///
/// Uniqueness of short codes and the capacity cap are re-checked under the
/// write lock, so concurrent inserts cannot break either invariant.
pub struct InMemoryLinkRepository {
    store: RwLock<Store>,
    capacity: usize,
}

impl InMemoryLinkRepository {
    /// Creates an empty store accepting at most `capacity` links.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                links: Vec::new(),
            }),
            capacity,
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.store.write().await;

        if store.links.iter().any(|l| l.has_code(&new_link.short_code)) {
            return Err(AppError::conflict(
                "This custom code is already taken. Please choose another.",
                json!({ "code": new_link.short_code }),
            ));
        }

        if store.links.len() >= self.capacity {
            return Err(AppError::limit_reached(
                format!("Maximum of {} concurrent URLs allowed", self.capacity),
                json!({ "max_links": self.capacity }),
            ));
        }

        let link = Link::new(
            store.next_id,
            new_link.original_url,
            new_link.short_code,
            new_link.short_url,
            new_link.validity_minutes,
            Utc::now(),
        );
        store.next_id += 1;
        store.links.insert(0, link.clone());

        tracing::info!(total = store.links.len(), "URL added");

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let store = self.store.read().await;
        Ok(store.links.iter().find(|l| l.has_code(code)).cloned())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.store.read().await.links.clone())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.store.read().await.links.len())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut store = self.store.write().await;

        let link = store
            .links
            .iter_mut()
            .find(|l| l.has_code(&new_click.short_code))
            .ok_or_else(|| {
                AppError::not_found(
                    "Short link not found",
                    json!({ "code": new_click.short_code }),
                )
            })?;

        let click = Click::new(Utc::now(), new_click.source, new_click.location);
        link.push_click(click.clone());

        Ok(click)
    }
}
