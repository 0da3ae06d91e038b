//! HTTP Client
//!
//! Authenticated request dispatch for the Nature Remo API: builds the request,
//! records the rate limit snapshot, classifies the status and decodes JSON.

use crate::client::rate_limiter::{RateLimit, RateLimitTracker};
use crate::config::{ClientConfig, REQUEST_TIMEOUT};
use crate::error::{RemoError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Query or form parameters for a request
pub type Params<'a> = &'a [(&'a str, &'a str)];

/// HTTP client bound to one access token and base URL
#[derive(Debug)]
pub struct HttpClient {
    /// Inner reqwest client
    client: Client,

    /// API root, without trailing slash
    base_url: String,

    /// Authorization and User-Agent headers sent with every request
    headers: HeaderMap,

    /// Latest rate limit snapshot
    rate_limiter: RateLimitTracker,
}

impl HttpClient {
    /// Create a new HTTP client from a validated configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RemoError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Self::with_client(config, client)
    }

    /// Create an HTTP client on a caller-supplied transport (proxy, custom
    /// TLS, shared pool). The fixed request timeout still applies per request.
    pub fn with_client(config: &ClientConfig, client: Client) -> Result<Self> {
        config.validate()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|e| RemoError::Config(format!("Invalid access token format: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| RemoError::Config(format!("Invalid user agent: {}", e)))?,
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
            rate_limiter: RateLimitTracker::new(),
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the rate limiter
    pub fn rate_limiter(&self) -> &RateLimitTracker {
        &self.rate_limiter
    }

    /// Absolute URL for a path relative to the API root
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path`, sending `params` as the query string
    pub async fn get<R>(&self, path: &str, params: Params<'_>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let mut request = self.request(Method::GET, path);
        if !params.is_empty() {
            request = request.query(params);
        }
        self.execute(request).await
    }

    /// POST `path`, sending `params` as a form-encoded body
    pub async fn post<R>(&self, path: &str, params: Params<'_>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).form(params);
        self.execute(request).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!(%method, %url, "dispatching request");

        self.client
            .request(method, url)
            .headers(self.headers.clone())
            .timeout(REQUEST_TIMEOUT)
    }

    async fn execute<R>(&self, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();

        let rate_limit = RateLimit::from_headers(response.headers()).inspect_err(|e| {
            warn!(status = status.as_u16(), error = %e, "rate limit headers rejected");
        })?;
        debug!(
            limit = rate_limit.limit,
            remaining = rate_limit.remaining,
            reset = %rate_limit.reset,
            "rate limit updated"
        );
        self.rate_limiter.record(rate_limit);

        if !status.is_success() {
            let message = response.text().await.ok().filter(|body| !body.is_empty());
            warn!(status = status.as_u16(), "request failed");
            return Err(RemoError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RemoError::Decode(e.to_string()))
    }
}
