//! Repository trait for short link data access.

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for held links and their clicks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already held
    /// (case-insensitive).
    ///
    /// Returns [`AppError::LimitReached`] if the store is full.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code, ignoring ASCII case.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all held links, newest first.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Counts held links.
    async fn count(&self) -> Result<usize, AppError>;

    /// Maximum number of links the store accepts.
    fn capacity(&self) -> usize;

    /// Appends a click to the link with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link holds the code.
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;
}
