//! Configuration Module
//!
//! Client settings and their loaders.

use std::time::Duration;

pub mod loader;

pub use loader::ClientConfig;

/// Production API root, including the API version segment
pub const DEFAULT_BASE_URL: &str = "https://api.nature.global/1";

/// Fixed timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Library version reported in the User-Agent
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the access token
pub const ACCESS_TOKEN_ENV: &str = "NATURE_REMO_ACCESS_TOKEN";

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "NATURE_REMO_BASE_URL";

/// Default User-Agent, `<name>/<version>`
pub fn default_user_agent() -> String {
    format!("nature-remo-rs/{}", LIB_VERSION)
}
