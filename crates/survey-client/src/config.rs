//! Runtime configuration
//!
//! The base URL is resolved once at startup. Deployments run strict
//! (`from_env`: absence is a hard failure) or lenient (`from_env_or_default`:
//! fall back to the development URL).

use std::env;

/// Environment variable carrying the API base URL
pub const BASE_URL_ENV: &str = "SURVEY_API_BASE_URL";
/// Development fallback used by the lenient resolver
pub const DEV_BASE_URL: &str = "http://localhost:8081";
/// Path of the public movements endpoint
pub const SUBMIT_PATH: &str = "/v1/public/forms/movements";

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The strict resolver found no base URL
    #[error("{BASE_URL_ENV} is not set")]
    MissingBaseUrl,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Build from an explicit base URL; whitespace and trailing slashes
    /// are trimmed.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Strict resolution: missing or blank env value is a startup failure.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Ok(Self::new(value)),
            _ => Err(ConfigError::MissingBaseUrl),
        }
    }

    /// Lenient resolution: fall back to [`DEV_BASE_URL`].
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|_| Self::new(DEV_BASE_URL))
    }

    /// The normalized base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the movements endpoint
    #[must_use]
    pub fn submit_url(&self) -> String {
        format!("{}{}", self.base_url, SUBMIT_PATH)
    }
}
