//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="http://localhost:3000"
//! export MAX_LINKS="5"
//! export SIMULATED_DELAY_MS="1000"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Origin used to build short URLs (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_LINKS` - Maximum number of held links (default: 5)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity used when none is given (default: 30)
//! - `SIMULATED_DELAY_MS` - Artificial latency of a shorten call (default: 1000)
//! - `CLICK_QUEUE_CAPACITY` - Click event buffer size (default: 1000, min: 10)
//! - `CLICK_SIMULATION_INTERVAL_SECS` - Mock click period, `0` disables (default: 0)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::LinkSettings;
use crate::application::services::link_service::VALIDITY_RANGE_MINUTES;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Origin prepended to short codes.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub max_links: usize,
    pub default_validity_minutes: i64,
    pub simulated_delay_ms: u64,
    pub click_queue_capacity: usize,
    /// Period of the click simulator in seconds. `0` leaves it off.
    pub click_simulation_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_links: 5,
            default_validity_minutes: 30,
            simulated_delay_ms: 1000,
            click_queue_capacity: 1000,
            click_simulation_interval_secs: 0,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            max_links: parse_var("MAX_LINKS", defaults.max_links)?,
            default_validity_minutes: parse_var(
                "DEFAULT_VALIDITY_MINUTES",
                defaults.default_validity_minutes,
            )?,
            simulated_delay_ms: parse_var("SIMULATED_DELAY_MS", defaults.simulated_delay_ms)?,
            click_queue_capacity: parse_var("CLICK_QUEUE_CAPACITY", defaults.click_queue_capacity)?,
            click_simulation_interval_secs: parse_var(
                "CLICK_SIMULATION_INTERVAL_SECS",
                defaults.click_simulation_interval_secs,
            )?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an http(s) origin
    /// - `log_format` is not `text` or `json`
    /// - a numeric setting is out of its range
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !(1..=1000).contains(&self.max_links) {
            anyhow::bail!(
                "MAX_LINKS must be between 1 and 1000, got {}",
                self.max_links
            );
        }

        if !VALIDITY_RANGE_MINUTES.contains(&self.default_validity_minutes) {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be between 1 and 10080, got {}",
                self.default_validity_minutes
            );
        }

        if self.simulated_delay_ms > 60_000 {
            anyhow::bail!(
                "SIMULATED_DELAY_MS is too large (max: 60000), got {}",
                self.simulated_delay_ms
            );
        }

        if self.click_queue_capacity < 10 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be at least 10, got {}",
                self.click_queue_capacity
            );
        }

        if self.click_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.click_queue_capacity
            );
        }

        if self.click_simulation_interval_secs > 86_400 {
            anyhow::bail!(
                "CLICK_SIMULATION_INTERVAL_SECS is too large (max: 86400), got {}",
                self.click_simulation_interval_secs
            );
        }

        Ok(())
    }

    /// Settings handed to the link service.
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings {
            base_url: self.base_url.clone(),
            default_validity_minutes: self.default_validity_minutes,
            simulated_delay: Duration::from_millis(self.simulated_delay_ms),
        }
    }

    /// Click simulator period, or `None` when disabled.
    pub fn click_simulation_interval(&self) -> Option<Duration> {
        (self.click_simulation_interval_secs > 0)
            .then(|| Duration::from_secs(self.click_simulation_interval_secs))
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max links: {}", self.max_links);
        tracing::info!("  Default validity: {} min", self.default_validity_minutes);
        tracing::info!("  Simulated delay: {} ms", self.simulated_delay_ms);
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);
        match self.click_simulation_interval() {
            Some(interval) => tracing::info!("  Click simulation: every {:?}", interval),
            None => tracing::info!("  Click simulation: disabled"),
        }
    }
}

/// Parses an optional environment variable, using `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
