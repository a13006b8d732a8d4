//! Wire types for the content provider.
//!
//! Every successful response arrives as `{ "data": ... }`; [`Envelope`]
//! unwraps it. Fields the views never read are still kept optional so a
//! provider that omits them does not fail decoding.

use serde::{Deserialize, Serialize};

/// Response envelope used by every provider endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_local: Option<String>,
}

/// One edition of the Bible text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub id: String,
    pub abbreviation: String,
    pub name: String,
    pub language: Language,
    #[serde(default)]
    pub abbreviation_local: Option<String>,
    #[serde(default)]
    pub name_local: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Translation {
    pub fn language_name(&self) -> &str {
        &self.language.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub bible_id: String,
    #[serde(default)]
    pub abbreviation: String,
    pub name: String,
    #[serde(default)]
    pub name_long: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    pub bible_id: String,
    pub book_id: String,
    /// Not always numeric: front matter uses values like `"intro"`.
    pub number: String,
    #[serde(default)]
    pub reference: String,
}

/// Neighbouring chapter reported alongside chapter content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterLink {
    pub id: String,
    #[serde(default)]
    pub number: String,
    pub book_id: String,
}

/// Rendered text of one chapter. `content` is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterContent {
    pub id: String,
    pub bible_id: String,
    #[serde(default)]
    pub book_id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub reference: String,
    pub content: String,
    #[serde(default)]
    pub verse_count: u32,
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub next: Option<ChapterLink>,
    #[serde(default)]
    pub previous: Option<ChapterLink>,
}

/// Entry in a chapter's verse index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseSummary {
    pub id: String,
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub chapter_id: String,
    #[serde(default)]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: String,
    pub bible_id: String,
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub chapter_id: String,
    pub content: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub reference: String,
    pub text: String,
}

/// One page of search matches as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    /// Absent when the provider answers with passages instead of verses.
    #[serde(default)]
    pub verses: Vec<SearchResult>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}
