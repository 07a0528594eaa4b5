//! Client configuration loading.

use std::env;

use crate::error::ConfigError;

pub const BASE_URL_ENV: &str = "MARKETING_API_BASE_URL";
pub const TOKEN_ENV: &str = "MARKETING_API_TOKEN";

/// Connection settings handed to `MarketingClient::from_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://10.0.0.8:8080`. Trailing `/` is dropped.
    pub base_url: String,
    /// Bearer token returned by `/api/login`, sent on every request when set.
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .map(|value| value.trim().to_string())
            .ok_or_else(|| ConfigError::Missing(BASE_URL_ENV.to_string()))?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(BASE_URL_ENV.to_string(), base_url));
        }
        let token = lookup(TOKEN_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let mut config = Self::new(base_url);
        config.token = token;
        Ok(config)
    }
}
