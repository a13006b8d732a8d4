//! Configuration loading, credentials and auth headers.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader, API_KEY_HEADER};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::{ConfigError, API_KEY_ENV};
pub use types::{ApiConfig, CacheConfig, Config, UiConfig};
