//! Error types for EDGAR client operations

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the EDGAR client
///
/// "No matching filing" is not an error: resolvers return `Ok(None)` for it,
/// so a transport failure can always be told apart from an empty result.
#[derive(Debug, Error)]
pub enum EdgarError {
    /// The endpoint answered with a non-success status
    #[error("SEC returned {status} for {url}")]
    Status {
        url: String,
        status: StatusCode,
    },

    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filing arrays in a submissions response disagree in length
    #[error("Malformed filings data: {0}")]
    MalformedFilings(String),

    /// Quarter outside 1..=4
    #[error("Invalid quarter: {0} (expected 1-4)")]
    InvalidQuarter(u8),

    /// CIK that is not a decimal number
    #[error("Invalid CIK: {0}")]
    InvalidCik(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EdgarError {
    /// Whether the endpoint reported the resource as missing (HTTP 404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Result type alias for EDGAR operations
pub type Result<T> = std::result::Result<T, EdgarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EdgarError::InvalidQuarter(5);
        assert_eq!(err.to_string(), "Invalid quarter: 5 (expected 1-4)");

        let err = EdgarError::Status {
            url: "https://data.sec.gov/submissions/CIK0000320193.json".to_string(),
            status: StatusCode::FORBIDDEN,
        };
        assert_eq!(
            err.to_string(),
            "SEC returned 403 Forbidden for https://data.sec.gov/submissions/CIK0000320193.json"
        );
    }

    #[test]
    fn test_is_not_found() {
        let missing = EdgarError::Status {
            url: "u".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert!(missing.is_not_found());

        let forbidden = EdgarError::Status {
            url: "u".to_string(),
            status: StatusCode::FORBIDDEN,
        };
        assert!(!forbidden.is_not_found());
        assert!(!EdgarError::Config("x".to_string()).is_not_found());
    }

    #[test]
    fn test_json_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EdgarError = parse_err.into();
        assert!(matches!(err, EdgarError::Json(_)));
    }
}
