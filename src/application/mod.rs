//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Submission checks and link creation
//! - [`services::stats_service::StatsService`] - Overview and per-link analytics

pub mod services;
