//! Bible reader for the terminal.
//!
//! Browses translations, books and chapters from a remote content provider,
//! reads chapter text and runs full-text search. Remote data goes through a
//! caching query layer; the reading position lives in a single selection
//! store shared by every view.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod paging;
pub mod query;
pub mod selection;
pub mod testament;
pub mod ui;
