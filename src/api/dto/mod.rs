//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and convert from domain entities
//! with `From` impls.

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
