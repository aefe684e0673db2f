//! Utility functions for code generation, URL validation, and mock analytics.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - HTTP(S) URL validation
//! - [`mock_analytics`] - Random source and location attribution

pub mod code_generator;
pub mod mock_analytics;
pub mod url_validator;
