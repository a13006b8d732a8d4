//! Model-View-Intent primitives.
//!
//! The selection cascade and the search view change state only by feeding
//! an intent to a pure reducer:
//!
//! ```text
//! intent ──→ reducer ──→ state ──→ view
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```

/// Something that asks for a state change: a pick in a list, a key typed
/// into the search box, a flag reported by a fetch.
pub trait Intent: Send + 'static {}

/// State owned by a reducer. Cloned into views, compared to skip no-op
/// updates.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function.
///
/// An intent that is not valid for the given state returns it unchanged;
/// reducers never fail.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents, left to right.
    fn replay<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
