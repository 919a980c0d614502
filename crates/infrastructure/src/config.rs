//! Catalog client configuration.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Catalog host used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Environment variable overriding the catalog base URL.
pub const BASE_URL_ENV: &str = "STOREFRONT_BASE_URL";

/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_ENV: &str = "STOREFRONT_TIMEOUT_SECS";

/// Error type for configuration loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("{name} must be an absolute http(s) URL, got {value:?}")]
    InvalidBaseUrl {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    /// The timeout is not a positive whole number of seconds.
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Settings for the HTTP catalog client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the catalog, without a trailing slash.
    pub base_url: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Per-request timeout; `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("Storefront/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Creates a default configuration pointing at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Loads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let value_of = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(value) = value_of(BASE_URL_ENV) {
            let trimmed = value.trim().trim_end_matches('/');
            let valid = Url::parse(trimmed)
                .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
            if !valid {
                return Err(ConfigError::InvalidBaseUrl {
                    name: BASE_URL_ENV,
                    value,
                });
            }
            config.base_url = trimmed.to_string();
        }

        if let Some(value) = value_of(TIMEOUT_ENV) {
            let seconds = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|seconds| *seconds > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    name: TIMEOUT_ENV,
                    value: value.clone(),
                })?;
            config.timeout = Some(Duration::from_secs(seconds));
        }

        Ok(config)
    }
}
