//! Nature Remo Error Types
//!
//! Errors surfaced by the request pipeline and the resource accessors.

use thiserror::Error;

/// Main error type for Nature Remo API operations
#[derive(Error, Debug)]
pub enum RemoError {
    /// Configuration errors (missing token, unreadable config file, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    Request(String),

    /// Request exceeded the fixed timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// A required rate limit header was absent from the response
    #[error("{0} header was not responded")]
    MissingHeader(&'static str),

    /// A rate limit header was present but not a base-10 integer
    #[error("{header} is invalid: {value}")]
    InvalidHeader { header: &'static str, value: String },

    /// Server answered with a status outside 2xx
    #[error("{}", api_error_message(.status, .message))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Response body could not be decoded
    #[error("Failed to parse the response. ({0})")]
    Decode(String),
}

fn api_error_message(status: &u16, message: &Option<String>) -> String {
    match message.as_deref() {
        Some(reason) => format!("Request failed: Status={}, Error= {}", status, reason),
        None => format!("Request failed: Status={} (no reason)", status),
    }
}

impl RemoError {
    /// True for failures caused by malformed rate limit headers
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            RemoError::MissingHeader(_) | RemoError::InvalidHeader { .. }
        )
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RemoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoError::Timeout(err.to_string())
        } else if err.is_connect() {
            RemoError::Request(format!("Connection failed: {}", err))
        } else {
            RemoError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RemoError {
    fn from(err: serde_json::Error) -> Self {
        RemoError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for RemoError {
    fn from(err: std::io::Error) -> Self {
        RemoError::Config(format!("IO error: {}", err))
    }
}

/// Result type alias for Nature Remo operations
pub type Result<T> = std::result::Result<T, RemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = RemoError::Api {
            status: 404,
            message: Some("not found".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request failed: Status=404, Error= not found"
        );
        assert_eq!(err.status(), Some(404));

        let err = RemoError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed: Status=500 (no reason)");
    }

    #[test]
    fn test_header_errors_are_protocol() {
        let missing = RemoError::MissingHeader("X-Rate-Limit-Limit");
        assert!(missing.is_protocol());
        assert_eq!(
            missing.to_string(),
            "X-Rate-Limit-Limit header was not responded"
        );

        let invalid = RemoError::InvalidHeader {
            header: "X-Rate-Limit-Reset",
            value: "soon".to_string(),
        };
        assert!(invalid.is_protocol());
        assert_eq!(invalid.to_string(), "X-Rate-Limit-Reset is invalid: soon");

        assert!(!RemoError::Decode("eof".to_string()).is_protocol());
        assert_eq!(RemoError::Decode("eof".to_string()).status(), None);
    }
}
