//! Authentication header building for provider requests.

use super::credentials::CredentialStatus;
use super::types::ApiConfig;

/// Header carrying the provider credential.
pub const API_KEY_HEADER: &str = "api-key";

/// Header name and value for authentication.
pub type AuthHeader = (&'static str, String);

/// Build the authentication header for the provider.
///
/// Returns `None` when no key is configured.
pub fn build_auth_header(api: &ApiConfig) -> Option<AuthHeader> {
    match api.resolve_credential() {
        CredentialStatus::Configured(key) => Some((API_KEY_HEADER, key.expose().to_string())),
        CredentialStatus::Unconfigured { .. } => None,
    }
}
