//! Short code generation and validation utilities.

use std::sync::LazyLock;

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,15}$").expect("custom code regex is valid"));

/// Generates a random short code.
///
/// Each of the [`GENERATED_CODE_LENGTH`] characters is drawn uniformly from
/// `A-Z`, `a-z` and `0-9`.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 3-15 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code breaks a rule.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_custom_code("Promo2025").is_ok());
/// assert!(validate_custom_code("ab").is_err());      // Too short
/// assert!(validate_custom_code("my-link").is_err()); // Hyphen
/// ```
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Custom code must be 3-15 alphanumeric characters only",
            json!({ "field": "custom_code", "code": code }),
        ));
    }

    Ok(())
}
