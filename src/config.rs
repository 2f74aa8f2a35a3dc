//! # Service Configuration
//!
//! Environment-driven configuration with sensible defaults.
//!
//! Everything except the provider API key has a default, so a local run
//! needs only `PLACES_API_KEY` (typically via a `.env` file loaded by
//! `dotenvy` in `main`).

use std::net::SocketAddr;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {message}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Parse failure description.
        message: String,
    },
}

/// Configuration for the place-search provider gateway.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider API key.
    pub api_key: String,
    /// Base URL override; `None` uses the production endpoint.
    pub base_url: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

/// Top-level service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Provider gateway settings.
    pub provider: ProviderConfig,
    /// Age in seconds below which a price is flagged as fresh.
    pub freshness_window_secs: u64,
    /// Maximum submission attempts per caller within the window.
    pub rate_limit_max_attempts: usize,
    /// Rate-limit window length in seconds.
    pub rate_limit_window_secs: u64,
}

impl ServiceConfig {
    /// Loads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when `PLACES_API_KEY` is unset and
    /// `ConfigError::Invalid` when a variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads the configuration through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("PLACES_API_KEY").ok_or(ConfigError::Missing("PLACES_API_KEY"))?;

        Ok(Self {
            bind_addr: parse_or(&lookup, "FUELSPOT_BIND_ADDR", "0.0.0.0:5000")?,
            provider: ProviderConfig {
                api_key,
                base_url: lookup("PLACES_BASE_URL"),
                timeout_ms: parse_or(&lookup, "PLACES_TIMEOUT_MS", "10000")?,
            },
            freshness_window_secs: parse_or(&lookup, "PRICE_FRESHNESS_SECS", "86400")?,
            rate_limit_max_attempts: parse_or(&lookup, "SUBMISSION_RATE_LIMIT", "20")?,
            rate_limit_window_secs: parse_or(&lookup, "SUBMISSION_RATE_WINDOW_SECS", "60")?,
        })
    }
}

fn parse_or<T>(
    lookup: impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(var)
        .unwrap_or_else(|| default.to_string())
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            var,
            message: e.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config =
            ServiceConfig::from_lookup(lookup_from(&[("PLACES_API_KEY", "k")])).unwrap();

        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.provider.timeout_ms, 10_000);
        assert!(config.provider.base_url.is_none());
        assert_eq!(config.freshness_window_secs, 86_400);
        assert_eq!(config.rate_limit_max_attempts, 20);
        assert_eq!(config.rate_limit_window_secs, 60);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = ServiceConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("PLACES_API_KEY")));
    }

    #[test]
    fn overrides_are_honored() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("PLACES_API_KEY", "k"),
            ("FUELSPOT_BIND_ADDR", "127.0.0.1:8080"),
            ("PLACES_TIMEOUT_MS", "2500"),
            ("SUBMISSION_RATE_LIMIT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.provider.timeout_ms, 2500);
        assert_eq!(config.rate_limit_max_attempts, 5);
    }

    #[test]
    fn invalid_value_reports_variable() {
        let err = ServiceConfig::from_lookup(lookup_from(&[
            ("PLACES_API_KEY", "k"),
            ("PLACES_TIMEOUT_MS", "soon"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "PLACES_TIMEOUT_MS",
                ..
            }
        ));
    }
}
