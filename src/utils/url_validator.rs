//! Long URL validation.
//!
//! Only absolute `http` and `https` URLs are accepted. The URL is stored as
//! submitted; parsing is used for validation only.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed, got '{0}'")]
    UnsupportedProtocol(String),
}

/// Parses `input` and checks its scheme.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for blank input.
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// such as `ftp:`, `javascript:` or `mailto:`.
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UrlValidationError::UnsupportedProtocol(other.to_string())),
    }
}
