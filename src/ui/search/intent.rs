use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    Input(char),
    Backspace,
    ClearInput,
    /// Submit the current input against the selected translation.
    /// Ignored without a translation or with a blank query.
    Submit { translation_id: Option<String> },
    NextPage { total_pages: usize },
    PrevPage,
    /// The selected translation changed; a submitted search no longer applies.
    TranslationChanged,
}

impl Intent for SearchIntent {}
