//! Selection state: translation → book → chapter.
//!
//! Setting a tier clears every tier below it. A book needs a translation
//! and a chapter needs a book; both are enforced by the types and by
//! [`SelectionIntent::check`].

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::{SelectionError, SelectionIntent};
pub use reducer::SelectionReducer;
pub use state::{Selection, SessionState, Tier};
pub use store::SelectionStore;
