//! Nature Remo - cloud API client
//!
//! Typed async access to the Nature Remo REST API with tracking of the
//! `X-Rate-Limit-*` quota reported on every response.
//!
//! ```rust,no_run
//! use nature_remo::Client;
//!
//! # async fn run() -> nature_remo::error::Result<()> {
//! let client = Client::new("ACCESS_TOKEN")?;
//!
//! let me = client.users().get_me().await?;
//! for device in client.devices().get_devices().await? {
//!     println!("{}: {}°C", device.name, device.newest_events.temperature.value);
//! }
//!
//! if let Some(rate_limit) = client.latest_rate_limit() {
//!     println!("{} has {} requests left", me.nickname, rate_limit.remaining);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{Device, Devices, NewestEvents, SensorValue, User, Users};
pub use client::{HttpClient, RateLimit};
pub use config::ClientConfig;
pub use error::{RemoError, Result};

/// The main Nature Remo client
///
/// Cloning is cheap; clones share the HTTP connection pool and the rate
/// limit snapshot.
#[derive(Debug, Clone)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Create a client for the production API
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(access_token))
    }

    /// Create a client from explicit settings
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: Arc::new(HttpClient::new(&config)?),
        })
    }

    /// Create a client that sends requests through `http`
    pub fn from_config_with_http(config: ClientConfig, http: reqwest::Client) -> Result<Self> {
        Ok(Self {
            http: Arc::new(HttpClient::with_client(&config, http)?),
        })
    }

    /// `/users` endpoints
    pub fn users(&self) -> Users {
        Users::new(Arc::clone(&self.http))
    }

    /// `/devices` endpoints
    pub fn devices(&self) -> Devices {
        Devices::new(Arc::clone(&self.http))
    }

    /// Rate limit reported by the most recent response, success or failure.
    ///
    /// Advisory only: with concurrent calls this is whichever response was
    /// recorded last.
    pub fn latest_rate_limit(&self) -> Option<RateLimit> {
        self.http.rate_limiter().latest()
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Raw dispatcher for endpoints without a dedicated accessor
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Library version
    pub fn version() -> &'static str {
        config::LIB_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_client_defaults() {
        let client = Client::new("token").unwrap();
        assert_eq!(client.base_url(), "https://api.nature.global/1");
        assert!(client.latest_rate_limit().is_none());
        assert_eq!(Client::version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(Client::new(""), Err(RemoError::Config(_))));
    }

    #[tokio::test]
    async fn test_accessors_share_rate_limit() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/me")
            .with_header("X-Rate-Limit-Limit", "30")
            .with_header("X-Rate-Limit-Reset", "1577804400")
            .with_header("X-Rate-Limit-Remaining", "29")
            .with_body(r#"{"id":"abc","nickname":"string"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/devices")
            .with_header("X-Rate-Limit-Limit", "30")
            .with_header("X-Rate-Limit-Reset", "1577804460")
            .with_header("X-Rate-Limit-Remaining", "28")
            .with_body("[]")
            .create_async()
            .await;

        let client =
            Client::from_config(ClientConfig::new("token").with_base_url(server.url())).unwrap();

        let me = client.users().get_me().await.unwrap();
        assert_eq!(
            me,
            User {
                id: "abc".to_string(),
                nickname: "string".to_string()
            }
        );
        assert_eq!(client.latest_rate_limit().unwrap().remaining, 29);

        let clone = client.clone();
        assert!(clone.devices().get_devices().await.unwrap().is_empty());

        let rate_limit = client.latest_rate_limit().unwrap();
        assert_eq!(rate_limit.remaining, 28);
        assert_eq!(rate_limit.reset.timestamp(), 1577804460);
    }

    #[tokio::test]
    async fn test_from_config_with_http() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/devices")
            .match_header("x-tenant", "home")
            .with_header("X-Rate-Limit-Limit", "30")
            .with_header("X-Rate-Limit-Reset", "1577804400")
            .with_header("X-Rate-Limit-Remaining", "29")
            .with_body("[]")
            .create_async()
            .await;

        let mut defaults = reqwest::header::HeaderMap::new();
        defaults.insert("x-tenant", "home".parse().unwrap());
        let transport = reqwest::Client::builder()
            .default_headers(defaults)
            .build()
            .unwrap();

        let config = ClientConfig::new("token").with_base_url(server.url());
        let client = Client::from_config_with_http(config, transport).unwrap();

        assert!(client.devices().get_devices().await.unwrap().is_empty());
        assert_eq!(client.latest_rate_limit().unwrap().remaining, 29);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_raw_dispatch() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/me")
            .with_header("X-Rate-Limit-Limit", "30")
            .with_header("X-Rate-Limit-Reset", "1577804400")
            .with_header("X-Rate-Limit-Remaining", "29")
            .with_body(r#"{"id":"abc","nickname":"string"}"#)
            .create_async()
            .await;

        let client =
            Client::from_config(ClientConfig::new("token").with_base_url(server.url())).unwrap();
        let value: serde_json::Value = client.http().get("users/me", &[]).await.unwrap();
        assert_eq!(value["nickname"], "string");
    }
}
