use thiserror::Error;

use crate::api::{Book, Chapter, Translation};
use crate::mvi::Intent;
use crate::selection::state::Selection;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// Replace the translation. Always clears book and chapter; `None`
    /// clears everything.
    SelectTranslation(Option<Translation>),
    /// Replace the book. Always clears the chapter.
    SelectBook(Book),
    SelectChapter(Chapter),
    /// Drop book and chapter, keep the translation.
    ClearBook,
    ClearChapter,
    SetLoading(bool),
    SetError(Option<String>),
}

impl Intent for SelectionIntent {}

/// Caller errors: an intent that would break the selection cascade.
///
/// These are contract violations rather than recoverable runtime
/// failures; the store rejects them and leaves its state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Contract violation: cannot select book '{book_id}' without a translation")]
    MissingTranslation { book_id: String },

    #[error("Contract violation: cannot select chapter '{chapter_id}' without a book")]
    MissingBook { chapter_id: String },

    #[error("Contract violation: book '{book_id}' belongs to '{book_translation}', not '{translation_id}'")]
    ForeignBook {
        book_id: String,
        book_translation: String,
        translation_id: String,
    },

    #[error("Contract violation: chapter '{chapter_id}' belongs to '{chapter_book}', not '{book_id}'")]
    ForeignChapter {
        chapter_id: String,
        chapter_book: String,
        book_id: String,
    },
}

impl SelectionIntent {
    /// Check that the intent is allowed from `selection`.
    pub fn check(&self, selection: &Selection) -> Result<(), SelectionError> {
        match self {
            SelectionIntent::SelectBook(book) => match selection.translation() {
                None => Err(SelectionError::MissingTranslation {
                    book_id: book.id.clone(),
                }),
                Some(translation) if translation.id != book.bible_id => {
                    Err(SelectionError::ForeignBook {
                        book_id: book.id.clone(),
                        book_translation: book.bible_id.clone(),
                        translation_id: translation.id.clone(),
                    })
                }
                Some(_) => Ok(()),
            },
            SelectionIntent::SelectChapter(chapter) => match selection.book() {
                None => Err(SelectionError::MissingBook {
                    chapter_id: chapter.id.clone(),
                }),
                Some(book) if book.id != chapter.book_id => Err(SelectionError::ForeignChapter {
                    chapter_id: chapter.id.clone(),
                    chapter_book: chapter.book_id.clone(),
                    book_id: book.id.clone(),
                }),
                Some(_) => Ok(()),
            },
            _ => Ok(()),
        }
    }
}
