//! Terminal UI: translation picker, reader and search.
//!
//! [`app::App`] holds all view state and never touches the network. The
//! runtime loop asks it which queries the current state needs, runs them
//! on tokio, and feeds the settled results back in.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod search;
pub mod status;
pub mod terminal_guard;
pub mod theme;

pub use app::{Action, App, Effect, ReaderFocus, Screen};
pub use runtime::run;
pub use status::ViewStatus;
