//! # Shortlink Demo
//!
//! A self-contained URL shortener demo built with Axum. Links live in
//! memory only, expire after a chosen validity window and collect
//! simulated click activity.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the repository trait and the click pipeline
//! - **Application Layer** ([`application`]) - Submission checks and statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory link store
//! - **API Layer** ([`api`]) - JSON API handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML shortener and statistics pages
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export MAX_LINKS=5
//! export CLICK_SIMULATION_INTERVAL_SECS=10
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkSettings, ShortenInput, StatsService};
    pub use crate::domain::click_event::ClickEvent;
    pub use crate::domain::entities::{Click, Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
