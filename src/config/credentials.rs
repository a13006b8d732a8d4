//! Credential resolution from configuration.
//!
//! The provider key is resolved from the config at request time and
//! wrapped so it never ends up in logs.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the provider key.
    pub fn resolve_credential(&self) -> CredentialStatus {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {
                CredentialStatus::Configured(SecureString::new(key.to_string()))
            }
            Some(_) => CredentialStatus::Unconfigured {
                reason: "api_key is empty".to_string(),
            },
            None => CredentialStatus::Unconfigured {
                reason: "api_key is not set".to_string(),
            },
        }
    }

    /// Check if a usable key is present.
    pub fn is_configured(&self) -> bool {
        matches!(self.resolve_credential(), CredentialStatus::Configured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn test_missing_key_is_unconfigured() {
        let api = ApiConfig::default();
        assert!(matches!(
            api.resolve_credential(),
            CredentialStatus::Unconfigured { .. }
        ));
        assert!(!api.is_configured());
    }

    #[test]
    fn test_blank_key_is_unconfigured() {
        let api = ApiConfig {
            api_key: Some("   ".to_string()),
            ..ApiConfig::default()
        };
        match api.resolve_credential() {
            CredentialStatus::Unconfigured { reason } => assert!(reason.contains("empty")),
            other => panic!("expected Unconfigured, got {:?}", other),
        }
    }

    #[test]
    fn test_key_is_trimmed() {
        let api = ApiConfig {
            api_key: Some(" abc123 ".to_string()),
            ..ApiConfig::default()
        };
        match api.resolve_credential() {
            CredentialStatus::Configured(key) => assert_eq!(key.expose(), "abc123"),
            other => panic!("expected Configured, got {:?}", other),
        }
    }
}
