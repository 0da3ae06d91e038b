//! Client Module
//!
//! HTTP dispatch and rate limit functionality.

pub mod http;
pub mod rate_limiter;

pub use http::{HttpClient, Params};
pub use rate_limiter::{RateLimit, RateLimitTracker};
