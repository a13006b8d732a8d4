//! Errors raised by the content client.

use thiserror::Error;

/// Errors that can occur while talking to the content provider.
///
/// Status codes are passed through untouched; the query layer decides
/// what they mean.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential is configured, so no request was sent.
    #[error("API key is not configured: {reason}")]
    MissingCredential { reason: String },

    /// The request could not be built (bad base URL, empty query).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failed to reach the provider or the request timed out.
    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("Request to '{endpoint}' failed with status {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The body was not the expected JSON envelope.
    #[error("Unexpected response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status reported by the provider, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Connection { source, .. } if source.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_only_for_status_errors() {
        let err = ApiError::Status {
            endpoint: "/bibles".to_string(),
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert!(err.to_string().contains("403"));

        let err = ApiError::MissingCredential {
            reason: "api_key is not set".to_string(),
        };
        assert_eq!(err.status(), None);
        assert!(!err.is_timeout());
    }
}
