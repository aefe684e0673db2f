//! Browser UI layer.
//!
//! Serves the shortener and statistics pages, rendered on the server with
//! Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`forms`] - Form payloads and lenient field parsing
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration
//! - [`views`] - Display-ready view models

pub mod forms;
pub mod handlers;
pub mod routes;
pub mod views;
