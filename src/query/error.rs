//! Error taxonomy surfaced to views.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::API_KEY_ENV;
use crate::query::key::ResourceKind;

/// Fixed message shown whenever the provider rejects the credential.
pub const AUTH_REMEDIATION: &str = "API key invalid or missing. Set the BIBLE_API_KEY environment variable (or api.api_key in config.toml) to a valid key from https://scripture.api.bible/";

/// Failures a query can settle with.
///
/// Only three classes reach the views. "Zero items" is not an error and
/// is reported through `ViewStatus::Empty` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Missing credential, or the provider answered 401/403.
    #[error("{remedy}", remedy = AUTH_REMEDIATION)]
    Auth { status: Option<u16> },

    /// The provider answered 404.
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Connection failures, timeouts, 5xx and anything unexpected.
    #[error("{message}")]
    NetworkOrServer { message: String, retryable: bool },
}

impl QueryError {
    pub fn network(message: impl Into<String>) -> Self {
        QueryError::NetworkOrServer {
            message: message.into(),
            retryable: true,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, QueryError::Auth { .. })
    }

    /// Only transient network/server failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            QueryError::NetworkOrServer {
                retryable: true,
                ..
            }
        )
    }

    /// Message a view shows for a failed fetch of `kind`.
    pub fn user_message(&self, kind: ResourceKind) -> String {
        match self {
            QueryError::Auth { .. } => AUTH_REMEDIATION.to_string(),
            QueryError::NotFound { .. } => format!("{} not found.", kind.label()),
            QueryError::NetworkOrServer { .. } => kind.failure_message().to_string(),
        }
    }
}

impl From<ApiError> for QueryError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingCredential { reason } => {
                tracing::warn!(reason = %reason, env = API_KEY_ENV, "No API key configured");
                QueryError::Auth { status: None }
            }
            ApiError::Status { status, .. } if status == 401 || status == 403 => {
                QueryError::Auth {
                    status: Some(status),
                }
            }
            ApiError::Status {
                status: 404,
                endpoint,
                ..
            } => QueryError::NotFound { resource: endpoint },
            ApiError::Status {
                status, message, ..
            } => QueryError::NetworkOrServer {
                message: format!("Server responded with status {}: {}", status, message),
                retryable: status == 408 || status == 429 || status >= 500,
            },
            ApiError::Connection { .. } => QueryError::network(err.to_string()),
            ApiError::Decode { .. } | ApiError::InvalidRequest(_) => {
                QueryError::NetworkOrServer {
                    message: err.to_string(),
                    retryable: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status {
            endpoint: "/bibles".to_string(),
            status: code,
            message: "nope".to_string(),
        }
    }

    #[test]
    fn unauthorized_and_forbidden_map_to_auth() {
        assert_eq!(
            QueryError::from(status(401)),
            QueryError::Auth { status: Some(401) }
        );
        assert_eq!(
            QueryError::from(status(403)),
            QueryError::Auth { status: Some(403) }
        );
    }

    #[test]
    fn missing_credential_maps_to_auth() {
        let err = QueryError::from(ApiError::MissingCredential {
            reason: "api_key is not set".to_string(),
        });
        assert!(err.is_auth());
        assert!(!err.is_retryable());
    }

    #[test]
    fn not_found_keeps_endpoint() {
        assert_eq!(
            QueryError::from(status(404)),
            QueryError::NotFound {
                resource: "/bibles".to_string()
            }
        );
    }

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        assert!(QueryError::from(status(500)).is_retryable());
        assert!(QueryError::from(status(503)).is_retryable());
        assert!(QueryError::from(status(429)).is_retryable());
        assert!(!QueryError::from(status(400)).is_retryable());
        assert!(!QueryError::from(status(401)).is_retryable());
        assert!(!QueryError::from(status(404)).is_retryable());
    }

    #[test]
    fn auth_message_is_the_remediation_for_every_kind() {
        let err = QueryError::Auth { status: Some(401) };
        for kind in ResourceKind::ALL {
            assert_eq!(err.user_message(kind), AUTH_REMEDIATION);
        }
        assert_eq!(err.to_string(), AUTH_REMEDIATION);
    }

    #[test]
    fn generic_failure_uses_view_message() {
        let err = QueryError::network("connection refused");
        assert_eq!(
            err.user_message(ResourceKind::Translations),
            "Failed to load Bibles. Please try again later."
        );
        assert_ne!(err.user_message(ResourceKind::Books), AUTH_REMEDIATION);
    }
}
