use std::time::Duration;

use crate::api::{
    BibleClient, Book, Chapter, ChapterContent, SearchResults, Translation, Verse, VerseSummary,
};
use crate::config::CacheConfig;
use crate::query::cache::{Cached, QueryCache};
use crate::query::error::QueryError;
use crate::query::key::QueryKey;
use crate::query::retry::RetryPolicy;

/// Any value a [`QueryKey`] can resolve to.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Translations(Vec<Translation>),
    Books(Vec<Book>),
    Chapters(Vec<Chapter>),
    ChapterContent(ChapterContent),
    Verses(Vec<VerseSummary>),
    Verse(Verse),
    Search(SearchResults),
}

impl Resource {
    /// A settled fetch with nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            Resource::Translations(items) => items.is_empty(),
            Resource::Books(items) => items.is_empty(),
            Resource::Chapters(items) => items.is_empty(),
            Resource::ChapterContent(content) => content.content.trim().is_empty(),
            Resource::Verses(items) => items.is_empty(),
            Resource::Verse(verse) => verse.content.trim().is_empty(),
            Resource::Search(results) => results.is_empty(),
        }
    }
}

/// Cached, de-duplicated, retried access to the content provider.
///
/// Clones share the same cache.
#[derive(Clone)]
pub struct QueryClient {
    api: BibleClient,
    cache: QueryCache<QueryKey, Resource>,
}

impl QueryClient {
    pub fn new(api: BibleClient, stale_time: Duration, retry: RetryPolicy) -> Self {
        Self {
            api,
            cache: QueryCache::new(stale_time, retry),
        }
    }

    pub fn from_config(api: BibleClient, config: &CacheConfig) -> Self {
        Self::new(
            api,
            Duration::from_secs(config.stale_time_seconds),
            RetryPolicy::from(config),
        )
    }

    pub fn api(&self) -> &BibleClient {
        &self.api
    }

    /// Resolve `key` through the cache.
    pub async fn fetch(&self, key: &QueryKey) -> Result<Resource, QueryError> {
        self.cache.fetch(key.clone(), move || self.load(key)).await
    }

    async fn load(&self, key: &QueryKey) -> Result<Resource, QueryError> {
        let resource = match key {
            QueryKey::Translations => Resource::Translations(self.api.list_translations().await?),
            QueryKey::Books { translation_id } => {
                Resource::Books(self.api.list_books(translation_id).await?)
            }
            QueryKey::Chapters {
                translation_id,
                book_id,
            } => Resource::Chapters(self.api.list_chapters(translation_id, book_id).await?),
            QueryKey::ChapterContent {
                translation_id,
                chapter_id,
            } => Resource::ChapterContent(
                self.api.chapter_content(translation_id, chapter_id).await?,
            ),
            QueryKey::Verses {
                translation_id,
                chapter_id,
            } => Resource::Verses(self.api.list_verses(translation_id, chapter_id).await?),
            QueryKey::Verse {
                translation_id,
                verse_id,
            } => Resource::Verse(self.api.verse(translation_id, verse_id).await?),
            QueryKey::Search {
                translation_id,
                query,
            } => Resource::Search(self.api.search(translation_id, query).await?),
        };
        Ok(resource)
    }

    pub async fn translations(&self) -> Result<Vec<Translation>, QueryError> {
        match self.fetch(&QueryKey::Translations).await? {
            Resource::Translations(items) => Ok(items),
            other => Err(mismatch(&QueryKey::Translations, &other)),
        }
    }

    /// Books of a translation. Empty without a request when `translation_id`
    /// is missing.
    pub async fn books(&self, translation_id: Option<&str>) -> Result<Vec<Book>, QueryError> {
        let Some(key) = QueryKey::books(translation_id) else {
            return Ok(Vec::new());
        };
        match self.fetch(&key).await? {
            Resource::Books(items) => Ok(items),
            other => Err(mismatch(&key, &other)),
        }
    }

    pub async fn chapters(
        &self,
        translation_id: Option<&str>,
        book_id: Option<&str>,
    ) -> Result<Vec<Chapter>, QueryError> {
        let Some(key) = QueryKey::chapters(translation_id, book_id) else {
            return Ok(Vec::new());
        };
        match self.fetch(&key).await? {
            Resource::Chapters(items) => Ok(items),
            other => Err(mismatch(&key, &other)),
        }
    }

    pub async fn chapter_content(
        &self,
        translation_id: Option<&str>,
        chapter_id: Option<&str>,
    ) -> Result<Option<ChapterContent>, QueryError> {
        let Some(key) = QueryKey::chapter_content(translation_id, chapter_id) else {
            return Ok(None);
        };
        match self.fetch(&key).await? {
            Resource::ChapterContent(content) => Ok(Some(content)),
            other => Err(mismatch(&key, &other)),
        }
    }

    pub async fn verses(
        &self,
        translation_id: Option<&str>,
        chapter_id: Option<&str>,
    ) -> Result<Vec<VerseSummary>, QueryError> {
        let Some(key) = QueryKey::verses(translation_id, chapter_id) else {
            return Ok(Vec::new());
        };
        match self.fetch(&key).await? {
            Resource::Verses(items) => Ok(items),
            other => Err(mismatch(&key, &other)),
        }
    }

    pub async fn verse(
        &self,
        translation_id: Option<&str>,
        verse_id: Option<&str>,
    ) -> Result<Option<Verse>, QueryError> {
        let Some(key) = QueryKey::verse(translation_id, verse_id) else {
            return Ok(None);
        };
        match self.fetch(&key).await? {
            Resource::Verse(verse) => Ok(Some(verse)),
            other => Err(mismatch(&key, &other)),
        }
    }

    /// Search within a translation. A blank query is not sent.
    pub async fn search(
        &self,
        translation_id: Option<&str>,
        query: &str,
    ) -> Result<SearchResults, QueryError> {
        let Some(key) = QueryKey::search(translation_id, query) else {
            return Ok(SearchResults::default());
        };
        match self.fetch(&key).await? {
            Resource::Search(results) => Ok(results),
            other => Err(mismatch(&key, &other)),
        }
    }

    pub fn peek(&self, key: &QueryKey) -> Option<Cached<Resource>> {
        self.cache.peek(key)
    }

    pub fn invalidate(&self, key: &QueryKey) -> bool {
        self.cache.invalidate(key)
    }

    pub fn clear_cache(&self) {
        tracing::info!(entries = self.cache.len(), "Clearing query cache");
        self.cache.clear();
    }
}

// Only reachable if `load` pairs a key with the wrong variant.
fn mismatch(key: &QueryKey, resource: &Resource) -> QueryError {
    tracing::error!(query = %key, resource = ?std::mem::discriminant(resource), "Resource kind mismatch");
    QueryError::NetworkOrServer {
        message: format!("Unexpected resource for {}", key),
        retryable: false,
    }
}
