//! Infrastructure layer implementing domain interfaces.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
