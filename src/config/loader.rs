use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "BIBLE_API_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/scripture-reader/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("scripture-reader").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, starts from `Config::default()`.
    /// - If the file exists, parses it as TOML.
    /// - Applies the `BIBLE_API_KEY` override, then validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Config::default()
        };

        config.apply_env_key(std::env::var(API_KEY_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replaces the configured key with a non-empty environment value.
    pub fn apply_env_key(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.api.api_key = Some(key);
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is not empty
    /// - Search limit, page size and staleness window are non-zero
    ///
    /// A missing API key is not a validation failure: it surfaces as an
    /// authentication error on the first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if self.api.search_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.search_limit must be greater than zero".to_string(),
            });
        }

        if self.ui.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.page_size must be greater than zero".to_string(),
            });
        }

        if self.cache.stale_time_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "cache.stale_time_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
