//! Configuration Loader
//!
//! Builds a `ClientConfig` in code, from the environment or from a JSON file.

use crate::config::{default_user_agent, ACCESS_TOKEN_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::error::{RemoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Settings for a single API client
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// OAuth access token issued by home.nature.global
    pub access_token: String,

    /// API root, including the version segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    /// Production settings for the given token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }

    /// Point the client at another API root (e.g. a local test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load from `NATURE_REMO_ACCESS_TOKEN` and `NATURE_REMO_BASE_URL`,
    /// reading a `.env` file first if one exists
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(ACCESS_TOKEN_ENV)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| RemoError::Config(format!("{} is not set", ACCESS_TOKEN_ENV)))?;

        let mut config = Self::new(token);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|u| !u.is_empty()) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RemoError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: ClientConfig = serde_json::from_str(&content).map_err(|e| {
            RemoError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can build a client
    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(RemoError::Config("access token is empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(RemoError::Config("base URL is empty".to_string()));
        }
        Ok(())
    }
}
