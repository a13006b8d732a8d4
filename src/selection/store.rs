//! Session-wide selection store.
//!
//! A cloneable handle over the shared session state. Views get a handle
//! instead of reaching into shared fields, so every mutation goes through
//! [`SelectionReducer`] and the cascade cannot be bypassed.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

use crate::api::{Book, Chapter, Translation};
use crate::mvi::Reducer;
use crate::selection::intent::{SelectionError, SelectionIntent};
use crate::selection::reducer::SelectionReducer;
use crate::selection::state::{Selection, SessionState};

#[derive(Clone)]
pub struct SelectionStore {
    inner: Arc<RwLock<SessionState>>,
    changes: Arc<watch::Sender<SessionState>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        let (changes, _) = watch::channel(SessionState::default());
        Self {
            inner: Arc::new(RwLock::new(SessionState::default())),
            changes: Arc::new(changes),
        }
    }

    /// Apply an intent.
    ///
    /// # Errors
    /// Returns a [`SelectionError`] when the intent would break the
    /// cascade. State is unchanged and nothing is published on error.
    pub fn dispatch(&self, intent: SelectionIntent) -> Result<SessionState, SelectionError> {
        let mut state = self.inner.write();

        if let Err(err) = intent.check(&state.selection) {
            tracing::warn!(error = %err, "Rejected selection change");
            return Err(err);
        }

        let next = SelectionReducer::reduce(state.clone(), intent);
        if next != *state {
            if next.selection != state.selection {
                tracing::info!(
                    from = %state.selection.breadcrumb(),
                    to = %next.selection.breadcrumb(),
                    "Selection changed"
                );
            }
            *state = next.clone();
            // Published under the write lock so subscribers see changes in order.
            self.changes.send_replace(next.clone());
        }

        Ok(next)
    }

    pub fn select_translation(&self, translation: Option<Translation>) -> SessionState {
        // Translation changes have no precondition.
        self.dispatch(SelectionIntent::SelectTranslation(translation))
            .unwrap_or_else(|_| self.snapshot())
    }

    pub fn select_book(&self, book: Book) -> Result<SessionState, SelectionError> {
        self.dispatch(SelectionIntent::SelectBook(book))
    }

    pub fn select_chapter(&self, chapter: Chapter) -> Result<SessionState, SelectionError> {
        self.dispatch(SelectionIntent::SelectChapter(chapter))
    }

    pub fn clear_book(&self) -> SessionState {
        self.dispatch(SelectionIntent::ClearBook)
            .unwrap_or_else(|_| self.snapshot())
    }

    pub fn clear_chapter(&self) -> SessionState {
        self.dispatch(SelectionIntent::ClearChapter)
            .unwrap_or_else(|_| self.snapshot())
    }

    pub fn set_loading(&self, loading: bool) {
        let _ = self.dispatch(SelectionIntent::SetLoading(loading));
    }

    pub fn set_error(&self, error: Option<String>) {
        let _ = self.dispatch(SelectionIntent::SetError(error));
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.read().clone()
    }

    pub fn selection(&self) -> Selection {
        self.inner.read().selection.clone()
    }

    pub fn translation(&self) -> Option<Translation> {
        self.inner.read().selection.translation().cloned()
    }

    pub fn book(&self) -> Option<Book> {
        self.inner.read().selection.book().cloned()
    }

    pub fn chapter(&self) -> Option<Chapter> {
        self.inner.read().selection.chapter().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.read().error.clone()
    }

    /// Receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.changes.subscribe()
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
