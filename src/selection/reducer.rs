use crate::mvi::Reducer;
use crate::selection::intent::SelectionIntent;
use crate::selection::state::{Selection, SessionState};

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SessionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let SessionState {
            selection,
            loading,
            error,
        } = state;

        match intent {
            SelectionIntent::SelectTranslation(Some(translation)) => SessionState {
                selection: Selection::Translation { translation },
                loading,
                error,
            },
            SelectionIntent::SelectTranslation(None) => SessionState {
                selection: Selection::Empty,
                loading,
                error,
            },
            SelectionIntent::SelectBook(book) => {
                let selection = match selection {
                    Selection::Translation { translation }
                    | Selection::Book { translation, .. }
                    | Selection::Chapter { translation, .. }
                        if translation.id == book.bible_id =>
                    {
                        Selection::Book { translation, book }
                    }
                    other => other,
                };
                SessionState {
                    selection,
                    loading,
                    error,
                }
            }
            SelectionIntent::SelectChapter(chapter) => {
                let selection = match selection {
                    Selection::Book { translation, book }
                    | Selection::Chapter {
                        translation, book, ..
                    } if book.id == chapter.book_id => Selection::Chapter {
                        translation,
                        book,
                        chapter,
                    },
                    other => other,
                };
                SessionState {
                    selection,
                    loading,
                    error,
                }
            }
            SelectionIntent::ClearBook => {
                let selection = match selection {
                    Selection::Book { translation, .. } | Selection::Chapter { translation, .. } => {
                        Selection::Translation { translation }
                    }
                    other => other,
                };
                SessionState {
                    selection,
                    loading,
                    error,
                }
            }
            SelectionIntent::ClearChapter => {
                let selection = match selection {
                    Selection::Chapter {
                        translation, book, ..
                    } => Selection::Book { translation, book },
                    other => other,
                };
                SessionState {
                    selection,
                    loading,
                    error,
                }
            }
            SelectionIntent::SetLoading(loading) => SessionState {
                selection,
                loading,
                error,
            },
            SelectionIntent::SetError(error) => SessionState {
                selection,
                loading,
                error,
            },
        }
    }
}
