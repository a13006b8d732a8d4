//! Remote content client for the Bible provider.
//!
//! Thin typed surface over the provider's REST endpoints. No caching or
//! retry happens here; see [`crate::query`] for that.

mod client;
mod error;
mod types;

pub use client::BibleClient;
pub use error::ApiError;
pub use types::{
    Book, Chapter, ChapterContent, ChapterLink, Envelope, Language, SearchResult, SearchResults,
    Translation, Verse, VerseSummary,
};
