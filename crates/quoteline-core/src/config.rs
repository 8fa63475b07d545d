//! Client configuration.
//!
//! Values come from [`ClientConfig::default`], optionally overridden by
//! environment variables, and then by whatever the embedding program layers
//! on top (the CLI maps its flags onto the same fields).

use serde::{Deserialize, Serialize};

use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::QuoteError;

/// Quote download endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://download.finance.yahoo.com/d/quotes.csv";

pub const BASE_URL_ENV: &str = "QUOTELINE_BASE_URL";
pub const TIMEOUT_MS_ENV: &str = "QUOTELINE_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("quoteline/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `QUOTELINE_BASE_URL` and `QUOTELINE_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, QuoteError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, QuoteError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }

        if let Some(raw) = lookup(TIMEOUT_MS_ENV) {
            config.timeout_ms = raw.trim().parse().map_err(|_| {
                QuoteError::invalid_config(format!("{TIMEOUT_MS_ENV} must be an integer, got '{raw}'"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<(), QuoteError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(QuoteError::invalid_config("base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(QuoteError::invalid_config(format!(
                "base_url must be an http(s) URL, got '{base_url}'"
            )));
        }
        if self.timeout_ms == 0 {
            return Err(QuoteError::invalid_config(
                "timeout_ms must be greater than zero",
            ));
        }
        Ok(())
    }
}
