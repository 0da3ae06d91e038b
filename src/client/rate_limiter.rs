//! Rate Limit Tracking
//!
//! Parses the `X-Rate-Limit-*` response headers and keeps the most recent
//! snapshot for the client.

use crate::error::{RemoError, Result};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use reqwest::header::HeaderMap;

pub const LIMIT_HEADER: &str = "X-Rate-Limit-Limit";
pub const RESET_HEADER: &str = "X-Rate-Limit-Reset";
pub const REMAINING_HEADER: &str = "X-Rate-Limit-Remaining";

/// Request quota reported by the API on a single response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window
    pub limit: i64,

    /// Requests left in the current window
    pub remaining: i64,

    /// When the window resets
    pub reset: DateTime<Utc>,
}

impl RateLimit {
    /// Parse a snapshot from response headers.
    ///
    /// All three headers are required. The reset header carries Unix epoch
    /// seconds.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let limit = parse_header(headers, LIMIT_HEADER)?;
        let reset_secs = parse_header(headers, RESET_HEADER)?;
        let remaining = parse_header(headers, REMAINING_HEADER)?;

        let reset = DateTime::<Utc>::from_timestamp(reset_secs, 0).ok_or_else(|| {
            RemoError::InvalidHeader {
                header: RESET_HEADER,
                value: reset_secs.to_string(),
            }
        })?;

        Ok(Self {
            limit,
            remaining,
            reset,
        })
    }

    /// Whether the quota for this window is used up
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// Time left until the window resets, zero once it has passed
    pub fn resets_in(&self, now: DateTime<Utc>) -> Duration {
        (self.reset - now).max(Duration::zero())
    }
}

fn parse_header(headers: &HeaderMap, name: &'static str) -> Result<i64> {
    let value = match headers.get(name) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(RemoError::MissingHeader(name)),
    };

    let text = value.to_str().map_err(|_| RemoError::InvalidHeader {
        header: name,
        value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
    })?;

    text.parse::<i64>().map_err(|_| RemoError::InvalidHeader {
        header: name,
        value: text.to_string(),
    })
}

/// Holds the latest rate limit snapshot observed by a client
#[derive(Debug, Default)]
pub struct RateLimitTracker {
    latest: RwLock<Option<RateLimit>>,
}

impl RateLimitTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot
    pub fn record(&self, rate_limit: RateLimit) {
        *self.latest.write() = Some(rate_limit);
    }

    /// The most recently recorded snapshot
    pub fn latest(&self) -> Option<RateLimit> {
        self.latest.read().clone()
    }

    /// Forget the stored snapshot
    pub fn clear(&self) {
        *self.latest.write() = None;
    }
}
