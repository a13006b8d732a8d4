use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

use crate::api::error::ApiError;
use crate::api::types::{
    Book, Chapter, ChapterContent, Envelope, SearchResults, Translation, Verse, VerseSummary,
};
use crate::config::{build_auth_header, ApiConfig, CredentialStatus};

/// Longest slice of an error body kept in [`ApiError::Status`].
const MAX_ERROR_BODY: usize = 300;

/// Typed client for the Bible content provider.
///
/// Holds no state beyond the connection pool; every call is an
/// idempotent GET whose `data` envelope is unwrapped before returning.
#[derive(Clone)]
pub struct BibleClient {
    client: Client,
    config: ApiConfig,
}

impl BibleClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn search_limit(&self) -> u32 {
        self.config.search_limit
    }

    pub async fn list_translations(&self) -> Result<Vec<Translation>, ApiError> {
        self.get(&["bibles"], &[]).await
    }

    pub async fn list_books(&self, translation_id: &str) -> Result<Vec<Book>, ApiError> {
        self.get(&["bibles", translation_id, "books"], &[]).await
    }

    pub async fn list_chapters(
        &self,
        translation_id: &str,
        book_id: &str,
    ) -> Result<Vec<Chapter>, ApiError> {
        self.get(&["bibles", translation_id, "books", book_id, "chapters"], &[])
            .await
    }

    /// Fetch a chapter rendered as plain text.
    pub async fn chapter_content(
        &self,
        translation_id: &str,
        chapter_id: &str,
    ) -> Result<ChapterContent, ApiError> {
        self.get(
            &["bibles", translation_id, "chapters", chapter_id],
            &[("content-type", "text".to_string())],
        )
        .await
    }

    pub async fn list_verses(
        &self,
        translation_id: &str,
        chapter_id: &str,
    ) -> Result<Vec<VerseSummary>, ApiError> {
        self.get(
            &["bibles", translation_id, "chapters", chapter_id, "verses"],
            &[],
        )
        .await
    }

    pub async fn verse(&self, translation_id: &str, verse_id: &str) -> Result<Verse, ApiError> {
        self.get(
            &["bibles", translation_id, "verses", verse_id],
            &[("content-type", "text".to_string())],
        )
        .await
    }

    /// Full-text search, bounded by `api.search_limit`.
    pub async fn search(
        &self,
        translation_id: &str,
        query: &str,
    ) -> Result<SearchResults, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApiError::InvalidRequest(
                "Search query must not be empty".to_string(),
            ));
        }

        self.get(
            &["bibles", translation_id, "search"],
            &[
                ("query", query.to_string()),
                ("limit", self.config.search_limit.to_string()),
            ],
        )
        .await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            ApiError::InvalidRequest(format!("Invalid base URL '{}': {}", self.config.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ApiError::InvalidRequest(format!(
                    "Base URL '{}' cannot carry a path",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let (header, key) = match build_auth_header(&self.config) {
            Some(header) => header,
            None => {
                let reason = match self.config.resolve_credential() {
                    CredentialStatus::Unconfigured { reason } => reason,
                    CredentialStatus::Configured(_) => "api_key is not set".to_string(),
                };
                return Err(ApiError::MissingCredential { reason });
            }
        };

        let url = self.endpoint(segments)?;
        let endpoint = url.path().to_string();

        tracing::debug!(endpoint = %endpoint, "Sending provider request");

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .header(header, key)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Connection {
            endpoint: endpoint.clone(),
            source: e,
        })?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::warn!(
                endpoint = %endpoint,
                status = status.as_u16(),
                latency_ms,
                "Provider returned error status"
            );
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY),
            });
        }

        tracing::debug!(
            endpoint = %endpoint,
            status = status.as_u16(),
            latency_ms,
            bytes = body.len(),
            "Provider request completed"
        );

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode { endpoint, source: e })?;
        Ok(envelope.data)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> BibleClient {
        BibleClient::new(ApiConfig {
            base_url: base_url.to_string(),
            api_key: Some("k".to_string()),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_appends_segments_to_base_path() {
        let client = client("https://api.scripture.api.bible/v1");
        let url = client.endpoint(&["bibles", "abc", "books"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.scripture.api.bible/v1/bibles/abc/books"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = client("http://127.0.0.1:9000/");
        let url = client.endpoint(&["bibles"]).unwrap();
        assert_eq!(url.path(), "/bibles");
    }

    #[test]
    fn endpoint_encodes_segments() {
        let client = client("http://localhost");
        let url = client.endpoint(&["bibles", "a/b c"]).unwrap();
        assert_eq!(url.path(), "/bibles/a%2Fb%20c");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let client = client("not a url");
        assert!(matches!(
            client.endpoint(&["bibles"]),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
