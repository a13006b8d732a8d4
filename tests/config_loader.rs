use scripture_reader::config::{
    build_auth_header, ApiConfig, CacheConfig, Config, ConfigError, CredentialStatus, UiConfig,
    API_KEY_HEADER,
};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "https://api.scripture.api.bible/v1");
    assert!(config.api.api_key.is_none());
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.search_limit, 20);

    assert_eq!(config.cache.stale_time_seconds, 3600);
    assert_eq!(config.cache.max_retries, 2);
    assert_eq!(config.cache.retry_backoff_base_ms, 1000);
    assert_eq!(config.cache.retry_backoff_max_ms, 30_000);

    assert_eq!(config.ui.page_size, 10);
    assert!(config.ui.default_translation.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("scripture-reader/config.toml"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.api.base_url, ApiConfig::default().base_url);
    assert_eq!(config.ui.page_size, 10);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://localhost:9000/v1"
search_limit = 50

[ui]
default_translation = "de4e12af7f28f599-02"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "http://localhost:9000/v1");
    assert_eq!(config.api.search_limit, 50);
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(
        config.ui.default_translation.as_deref(),
        Some("de4e12af7f28f599-02")
    );
    assert_eq!(config.ui.page_size, 10);
    assert_eq!(config.cache.max_retries, 2);
}

#[test]
fn test_full_file_parses() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://example.test/v1"
api_key = "from-file"
timeout_seconds = 10
connect_timeout_seconds = 1
search_limit = 5

[cache]
stale_time_seconds = 120
max_retries = 0
retry_backoff_base_ms = 10
retry_backoff_max_ms = 100

[ui]
page_size = 25
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.cache.stale_time_seconds, 120);
    assert_eq!(config.cache.max_retries, 0);
    assert_eq!(config.ui.page_size, 25);
    // The environment may override the key, but never with a blank value.
    assert!(config.api.api_key.is_some());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[ui]\npage_size = \"ten\"\n");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_zero_page_size_fails_validation() {
    let (_dir, path) = write_config("[ui]\npage_size = 0\n");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ui.page_size"));
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = Config::default();
    config.api.base_url = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.api.search_limit = 0;
    assert!(config.validate().is_err());

    let config = Config {
        cache: CacheConfig {
            stale_time_seconds: 0,
            ..CacheConfig::default()
        },
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_key_is_not_a_validation_error() {
    let config = Config {
        ui: UiConfig::default(),
        ..Config::default()
    };
    assert!(config.api.api_key.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_env_key_overrides_file_key() {
    let mut config = Config::default();
    config.api.api_key = Some("from-file".to_string());

    config.apply_env_key(Some("from-env".to_string()));

    assert_eq!(config.api.api_key.as_deref(), Some("from-env"));
}

#[test]
fn test_blank_env_key_is_ignored() {
    let mut config = Config::default();
    config.api.api_key = Some("from-file".to_string());

    config.apply_env_key(Some("   ".to_string()));
    config.apply_env_key(None);

    assert_eq!(config.api.api_key.as_deref(), Some("from-file"));
}

#[test]
fn test_credential_resolution() {
    let mut api = ApiConfig::default();
    assert!(!api.is_configured());
    assert!(matches!(
        api.resolve_credential(),
        CredentialStatus::Unconfigured { .. }
    ));
    assert!(build_auth_header(&api).is_none());

    api.api_key = Some("secret".to_string());
    assert!(api.is_configured());
    let (name, value) = build_auth_header(&api).unwrap();
    assert_eq!(name, API_KEY_HEADER);
    assert_eq!(value, "secret");
}

#[test]
fn test_blank_key_is_unconfigured() {
    let api = ApiConfig {
        api_key: Some("  ".to_string()),
        ..ApiConfig::default()
    };
    assert!(!api.is_configured());
    assert!(build_auth_header(&api).is_none());
}
