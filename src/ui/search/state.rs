use crate::mvi::UiState;
use crate::query::SearchRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub input: String,
    pub submitted: Option<SearchRequest>,
    /// Result page, 1-based.
    pub page: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            input: String::new(),
            submitted: None,
            page: 1,
        }
    }
}

impl UiState for SearchState {}

impl SearchState {
    pub fn query(&self) -> Option<&str> {
        self.submitted.as_ref().map(|r| r.query.as_str())
    }
}
