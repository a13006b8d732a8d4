use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Content provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the provider (e.g., "https://api.scripture.api.bible/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Credential sent in the `api-key` header.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Maximum number of matches requested per search (default: 20).
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
}

/// Query cache policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a successful result is served without refetching (default: 3600).
    #[serde(default = "default_stale_time")]
    pub stale_time_seconds: u64,
    /// Retries after the first failed attempt (default: 2).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base backoff in milliseconds, doubled per retry (default: 1000).
    #[serde(default = "default_retry_backoff_base_ms")]
    pub retry_backoff_base_ms: u64,
    /// Upper bound for a single backoff in milliseconds (default: 30000).
    #[serde(default = "default_retry_backoff_max_ms")]
    pub retry_backoff_max_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per page in paginated lists (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Translation id preselected on startup.
    #[serde(default)]
    pub default_translation: Option<String>,
}

fn default_base_url() -> String {
    "https://api.scripture.api.bible/v1".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_search_limit() -> u32 {
    20
}

fn default_stale_time() -> u64 {
    60 * 60
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_base_ms() -> u64 {
    1000
}

fn default_retry_backoff_max_ms() -> u64 {
    30_000
}

fn default_page_size() -> usize {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            search_limit: default_search_limit(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time_seconds: default_stale_time(),
            max_retries: default_max_retries(),
            retry_backoff_base_ms: default_retry_backoff_base_ms(),
            retry_backoff_max_ms: default_retry_backoff_max_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_translation: None,
        }
    }
}
