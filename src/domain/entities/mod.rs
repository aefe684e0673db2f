//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures with a few invariant-keeping helpers.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL with its validity window and clicks
//! - [`Click`] - A single recorded visit
//! - [`StatsOverview`] / [`LinkStats`] - Statistics derived from held links
//!
//! Creation inputs use separate structs (`NewLink`, `NewClick`) so the store
//! stays in charge of identifiers and timestamps.

pub mod click;
pub mod link;
pub mod stats;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
pub use stats::{ClickActivity, LinkStats, RECENT_CLICK_LIMIT, StatsOverview, clicks_per_hour};
