//! Link creation and retrieval service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::{UrlValidationError, validate_url};
use serde_json::json;
use tracing::{info, warn};

/// Inclusive bounds of the validity window, in minutes (one week max).
pub const VALIDITY_RANGE_MINUTES: std::ops::RangeInclusive<i64> = 1..=10_080;

/// Behaviour knobs for [`LinkService`], taken from configuration.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// Origin prepended to short codes, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Validity applied when a submission carries none.
    pub default_validity_minutes: i64,
    /// Artificial latency standing in for a network round-trip.
    pub simulated_delay: Duration,
}

/// A shortening request as submitted by the form or the API.
#[derive(Debug, Clone, Default)]
pub struct ShortenInput {
    pub url: String,
    pub validity_minutes: Option<i64>,
    pub custom_code: Option<String>,
}

/// Service for creating and retrieving shortened links.
///
/// Runs the submission checks in a fixed order and reports only the first
/// failure. Nothing is stored when a check fails.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    settings: LinkSettings,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, settings: LinkSettings) -> Self {
        Self {
            link_repository,
            settings,
        }
    }

    /// Validates a submission and creates the short link.
    ///
    /// # Check order
    ///
    /// 1. URL is not blank
    /// 2. URL is an absolute `http`/`https` URL
    /// 3. Custom code (if any) is 3-15 alphanumeric characters
    /// 4. Custom code (if any) is not already held, ignoring case
    /// 5. Validity is within [`VALIDITY_RANGE_MINUTES`]
    /// 6. The store is not full
    ///
    /// After the checks pass the simulated delay elapses, then the code is
    /// assigned (custom or a fresh 6-character code) and the link stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for checks 1-3 and 5.
    /// Returns [`AppError::Conflict`] for a taken custom code, or a generated
    /// code that happens to collide (there is no retry).
    /// Returns [`AppError::LimitReached`] when the store is full.
    pub async fn shorten(&self, input: ShortenInput) -> Result<Link, AppError> {
        info!(url = %input.url, "Shortening URL");

        let original_url = input.url.trim();
        validate_url(original_url).map_err(|e| match e {
            UrlValidationError::Empty => {
                warn!(rule = "url_required", "Empty URL submitted");
                AppError::bad_request("Please enter a URL to shorten", json!({ "field": "url" }))
            }
            e => {
                warn!(rule = "url_format", reason = %e, "Invalid URL format");
                AppError::bad_request(
                    "Please enter a valid URL (must start with http:// or https://)",
                    json!({ "field": "url", "reason": e.to_string() }),
                )
            }
        })?;

        let custom_code = input.custom_code.filter(|c| !c.is_empty());
        if let Some(code) = &custom_code {
            validate_custom_code(code).inspect_err(|_| {
                warn!(rule = "custom_code_format", "Invalid custom code format");
            })?;

            if self.link_repository.find_by_code(code).await?.is_some() {
                warn!(rule = "custom_code_unique", code = %code, "Custom code collision detected");
                return Err(AppError::conflict(
                    "This custom code is already taken. Please choose another.",
                    json!({ "field": "custom_code", "code": code }),
                ));
            }
        }

        let validity_minutes = input
            .validity_minutes
            .unwrap_or(self.settings.default_validity_minutes);
        if !VALIDITY_RANGE_MINUTES.contains(&validity_minutes) {
            warn!(rule = "validity_range", validity_minutes, "Invalid validity period");
            return Err(AppError::bad_request(
                "Validity must be between 1 and 10,080 minutes (1 week)",
                json!({ "field": "validity", "provided": validity_minutes }),
            ));
        }

        let max_links = self.link_repository.capacity();
        if self.link_repository.count().await? >= max_links {
            warn!(rule = "link_limit", max_links, "URL limit reached");
            return Err(AppError::limit_reached(
                format!("Maximum of {max_links} concurrent URLs allowed"),
                json!({ "max_links": max_links }),
            ));
        }

        if !self.settings.simulated_delay.is_zero() {
            tokio::time::sleep(self.settings.simulated_delay).await;
        }

        let short_code = match custom_code {
            Some(code) => code,
            None => self.generate_unique_code().await?,
        };

        let new_link = NewLink {
            original_url: original_url.to_string(),
            short_url: self.get_short_url(&short_code),
            short_code,
            validity_minutes,
        };

        let link = self.link_repository.create(new_link).await?;
        info!(code = %link.short_code, "URL shortened successfully");

        Ok(link)
    }

    /// Lists held links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Retrieves a link by its short code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link holds the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Returns true once the store holds its maximum number of links.
    pub async fn is_full(&self) -> Result<bool, AppError> {
        Ok(self.link_repository.count().await? >= self.link_repository.capacity())
    }

    pub fn default_validity_minutes(&self) -> i64 {
        self.settings.default_validity_minutes
    }

    pub fn max_links(&self) -> usize {
        self.link_repository.capacity()
    }

    /// Constructs the full short URL from the configured base URL and a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    /// Draws a code and checks it once against held links.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        let code = generate_code();

        if self.link_repository.find_by_code(&code).await?.is_some() {
            warn!(code = %code, "Generated code collided with an existing link");
            return Err(AppError::conflict(
                "Generated code collided with an existing link. Please try again.",
                json!({ "code": code }),
            ));
        }

        Ok(code)
    }
}
