//! Internal error types for log API operations.
//!
//! These errors are internal to `hercycle-api` and are mapped to
//! [`LogStoreError`] at the port boundary.

use hercycle_core::LogStoreError;
use thiserror::Error;

/// Result type alias for log API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to log API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed with an HTTP error status.
    #[error("Log API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<ApiError> for LogStoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestFailed { .. } | ApiError::Network(_) => {
                Self::Unavailable(err.to_string())
            }
            ApiError::JsonParse(_) => Self::InvalidResponse(err.to_string()),
            ApiError::InvalidUrl(_) => Self::NotConfigured(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message() {
        let error = ApiError::RequestFailed {
            status: 503,
            url: "https://example.test/exec".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("example.test"));
    }

    #[test]
    fn test_mapping_to_port_errors() {
        let failed = ApiError::RequestFailed {
            status: 500,
            url: String::new(),
        };
        assert!(matches!(
            LogStoreError::from(failed),
            LogStoreError::Unavailable(_)
        ));

        let bad_url = ApiError::InvalidUrl(url::Url::parse("not a url").unwrap_err());
        assert!(matches!(
            LogStoreError::from(bad_url),
            LogStoreError::NotConfigured(_)
        ));

        let bad_json = ApiError::JsonParse(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(matches!(
            LogStoreError::from(bad_json),
            LogStoreError::InvalidResponse(_)
        ));
    }
}
