//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Queued click model
//! - [`click_worker`] - Asynchronous click recording worker
//! - [`click_simulator`] - Optional generator of mock traffic
//!
//! # Click Processing Flow
//!
//! 1. The click API handler or the simulator builds a [`click_event::ClickEvent`]
//! 2. The event is sent to a bounded channel (dropped when full)
//! 3. [`click_worker::run_click_worker`] appends it to the link through
//!    [`repositories::LinkRepository`]

pub mod click_event;
pub mod click_simulator;
pub mod click_worker;
pub mod entities;
pub mod repositories;
