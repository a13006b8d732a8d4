use crate::api::{Book, Chapter, Translation};
use crate::mvi::UiState;

/// The three-tier reading selection.
///
/// Each variant carries every tier above it, so a chapter can only exist
/// together with its book and translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    Translation {
        translation: Translation,
    },
    Book {
        translation: Translation,
        book: Book,
    },
    Chapter {
        translation: Translation,
        book: Book,
        chapter: Chapter,
    },
}

impl UiState for Selection {}

/// Depth of a selection, ordered top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Empty,
    Translation,
    Book,
    Chapter,
}

impl Selection {
    pub fn tier(&self) -> Tier {
        match self {
            Self::Empty => Tier::Empty,
            Self::Translation { .. } => Tier::Translation,
            Self::Book { .. } => Tier::Book,
            Self::Chapter { .. } => Tier::Chapter,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn translation(&self) -> Option<&Translation> {
        match self {
            Self::Empty => None,
            Self::Translation { translation }
            | Self::Book { translation, .. }
            | Self::Chapter { translation, .. } => Some(translation),
        }
    }

    pub fn book(&self) -> Option<&Book> {
        match self {
            Self::Book { book, .. } | Self::Chapter { book, .. } => Some(book),
            _ => None,
        }
    }

    pub fn chapter(&self) -> Option<&Chapter> {
        match self {
            Self::Chapter { chapter, .. } => Some(chapter),
            _ => None,
        }
    }

    pub fn translation_id(&self) -> Option<&str> {
        self.translation().map(|t| t.id.as_str())
    }

    pub fn book_id(&self) -> Option<&str> {
        self.book().map(|b| b.id.as_str())
    }

    pub fn chapter_id(&self) -> Option<&str> {
        self.chapter().map(|c| c.id.as_str())
    }

    /// Human-readable breadcrumb, e.g. `KJV › Genesis › 1`.
    pub fn breadcrumb(&self) -> String {
        let mut parts = Vec::new();
        if let Some(t) = self.translation() {
            parts.push(t.abbreviation.clone());
        }
        if let Some(b) = self.book() {
            parts.push(b.name.clone());
        }
        if let Some(c) = self.chapter() {
            parts.push(c.number.clone());
        }
        parts.join(" › ")
    }
}

/// Selection plus the loading/error flags shared with every view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub selection: Selection,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for SessionState {}
