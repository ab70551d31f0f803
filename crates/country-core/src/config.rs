//! Client configuration.
//!
//! Resolved once by the caller and handed to the sources and services. The
//! core never reads environment variables; front ends map their own flags
//! onto [`ClientConfig`].

use crate::error::{CountryError, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    request_timeout: Duration,
    exact_name_match: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            exact_name_match: true,
        }
    }
}

impl ClientConfig {
    /// Create a config for `base_url`, validating it.
    ///
    /// Trailing slashes are stripped so endpoint paths can be appended as-is.
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CountryError::Config("base_url cannot be empty".into()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CountryError::Config(format!(
                "base_url must be an http(s) URL, got '{base_url}'"
            )));
        }
        if request_timeout.is_zero() {
            return Err(CountryError::Config(
                "request_timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            base_url,
            request_timeout,
            exact_name_match: true,
        })
    }

    /// Switch detail lookups between whole-name and partial matching.
    pub fn with_exact_name_match(mut self, exact: bool) -> Self {
        self.exact_name_match = exact;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn exact_name_match(&self) -> bool {
        self.exact_name_match
    }
}
