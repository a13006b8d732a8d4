//! Shared fixtures and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use mock_api::{MockApi, MockResponse};
use scripture_reader::api::{
    BibleClient, Book, Chapter, ChapterContent, ChapterLink, Language, SearchResult,
    SearchResults, Translation,
};
use scripture_reader::config::ApiConfig;
use scripture_reader::query::{QueryClient, RetryPolicy};
use std::time::Duration;

pub const TEST_KEY: &str = "test-key";

/// Retry policy with millisecond backoff so failure tests stay fast.
pub fn fast_retry(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        base_delay: Duration::from_millis(5),
        max_delay: Duration::from_millis(20),
    }
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        api_key: Some(TEST_KEY.to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

pub fn api_client(mock: &MockApi) -> BibleClient {
    BibleClient::new(api_config(&mock.base_url())).expect("Failed to build client")
}

pub fn query_client(mock: &MockApi, retry: RetryPolicy) -> QueryClient {
    QueryClient::new(api_client(mock), Duration::from_secs(3600), retry)
}

// -- Fixtures -----------------------------------------------------------------

pub fn translation(id: &str, abbreviation: &str) -> Translation {
    Translation {
        id: id.to_string(),
        abbreviation: abbreviation.to_string(),
        name: format!("{} Bible", abbreviation),
        language: Language {
            id: "eng".to_string(),
            name: "English".to_string(),
            name_local: Some("English".to_string()),
        },
        abbreviation_local: Some(abbreviation.to_string()),
        name_local: None,
        description: None,
    }
}

pub fn book(translation_id: &str, id: &str, name: &str) -> Book {
    Book {
        id: id.to_string(),
        bible_id: translation_id.to_string(),
        abbreviation: id.to_string(),
        name: name.to_string(),
        name_long: format!("The Book of {}", name),
    }
}

pub fn chapter(translation_id: &str, book_id: &str, number: &str) -> Chapter {
    Chapter {
        id: format!("{}.{}", book_id, number),
        bible_id: translation_id.to_string(),
        book_id: book_id.to_string(),
        number: number.to_string(),
        reference: format!("{} {}", book_id, number),
    }
}

pub fn link(book_id: &str, number: &str) -> ChapterLink {
    ChapterLink {
        id: format!("{}.{}", book_id, number),
        number: number.to_string(),
        book_id: book_id.to_string(),
    }
}

pub fn content(translation_id: &str, book_id: &str, number: &str, text: &str) -> ChapterContent {
    ChapterContent {
        id: format!("{}.{}", book_id, number),
        bible_id: translation_id.to_string(),
        book_id: Some(book_id.to_string()),
        number: Some(number.to_string()),
        reference: format!("{} {}", book_id, number),
        content: text.to_string(),
        verse_count: 1,
        copyright: "Public Domain".to_string(),
        next: None,
        previous: None,
    }
}

pub fn search_results(query: &str, hits: &[(&str, &str)]) -> SearchResults {
    SearchResults {
        query: query.to_string(),
        total: hits.len() as u32,
        limit: 20,
        offset: 0,
        verses: hits
            .iter()
            .map(|(id, text)| SearchResult {
                id: id.to_string(),
                reference: id.replace('.', " "),
                text: text.to_string(),
            })
            .collect(),
    }
}

/// Serve a small two-book library for translation `t1`:
/// Genesis (chapters 1-2) and Matthew (chapter 1).
pub async fn serve_library(mock: &MockApi) {
    mock.route(
        "/bibles",
        MockResponse::data(&vec![translation("t1", "KJV"), translation("t2", "WEB")]),
    )
    .await;
    mock.route(
        "/bibles/t1/books",
        MockResponse::data(&vec![book("t1", "GEN", "Genesis"), book("t1", "MAT", "Matthew")]),
    )
    .await;
    mock.route(
        "/bibles/t1/books/GEN/chapters",
        MockResponse::data(&vec![chapter("t1", "GEN", "1"), chapter("t1", "GEN", "2")]),
    )
    .await;
    mock.route(
        "/bibles/t1/books/MAT/chapters",
        MockResponse::data(&vec![chapter("t1", "MAT", "1")]),
    )
    .await;

    let mut gen1 = content("t1", "GEN", "1", "[1] In the beginning God created the heaven and the earth.");
    gen1.next = Some(link("GEN", "2"));
    let mut gen2 = content("t1", "GEN", "2", "[1] Thus the heavens and the earth were finished.");
    gen2.previous = Some(link("GEN", "1"));
    mock.route("/bibles/t1/chapters/GEN.1", MockResponse::data(&gen1)).await;
    mock.route("/bibles/t1/chapters/GEN.2", MockResponse::data(&gen2)).await;
    mock.route(
        "/bibles/t1/chapters/MAT.1",
        MockResponse::data(&content("t1", "MAT", "1", "[1] The book of the generation of Jesus Christ.")),
    )
    .await;
}
