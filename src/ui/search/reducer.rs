use crate::mvi::Reducer;
use crate::query::SearchRequest;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Input(ch) => {
                let mut input = state.input;
                input.push(ch);
                SearchState { input, ..state }
            }
            SearchIntent::Backspace => {
                let mut input = state.input;
                input.pop();
                SearchState { input, ..state }
            }
            SearchIntent::ClearInput => SearchState {
                input: String::new(),
                ..state
            },
            SearchIntent::Submit { translation_id } => {
                let query = state.input.trim().to_string();
                match translation_id {
                    Some(translation_id) if !query.is_empty() => SearchState {
                        submitted: Some(SearchRequest::new(translation_id, query)),
                        page: 1,
                        ..state
                    },
                    _ => state,
                }
            }
            SearchIntent::NextPage { total_pages } => {
                if state.page < total_pages {
                    SearchState {
                        page: state.page + 1,
                        ..state
                    }
                } else {
                    state
                }
            }
            SearchIntent::PrevPage => {
                if state.page > 1 {
                    SearchState {
                        page: state.page - 1,
                        ..state
                    }
                } else {
                    state
                }
            }
            SearchIntent::TranslationChanged => SearchState {
                submitted: None,
                page: 1,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchState {
        text.chars().fold(SearchState::default(), |state, ch| {
            SearchReducer::reduce(state, SearchIntent::Input(ch))
        })
    }

    #[test]
    fn submit_trims_and_resets_page() {
        let state = SearchState {
            page: 3,
            ..typed("  love ")
        };
        let state = SearchReducer::reduce(
            state,
            SearchIntent::Submit {
                translation_id: Some("t1".to_string()),
            },
        );
        assert_eq!(state.submitted, Some(SearchRequest::new("t1", "love")));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn blank_query_is_not_submitted() {
        let state = SearchReducer::reduce(
            typed("   "),
            SearchIntent::Submit {
                translation_id: Some("t1".to_string()),
            },
        );
        assert_eq!(state.submitted, None);
    }

    #[test]
    fn submit_needs_a_translation() {
        let state = SearchReducer::reduce(
            typed("love"),
            SearchIntent::Submit {
                translation_id: None,
            },
        );
        assert_eq!(state.submitted, None);
        assert_eq!(state.input, "love");
    }

    #[test]
    fn paging_stays_in_bounds() {
        let state = SearchReducer::reduce(SearchState::default(), SearchIntent::PrevPage);
        assert_eq!(state.page, 1);
        let state = SearchReducer::reduce(state, SearchIntent::NextPage { total_pages: 2 });
        let state = SearchReducer::reduce(state, SearchIntent::NextPage { total_pages: 2 });
        assert_eq!(state.page, 2);
    }

    #[test]
    fn backspace_and_translation_change() {
        let state = SearchReducer::reduce(typed("lov"), SearchIntent::Backspace);
        assert_eq!(state.input, "lo");
        let state = SearchReducer::reduce(
            state,
            SearchIntent::Submit {
                translation_id: Some("t1".to_string()),
            },
        );
        let state = SearchReducer::reduce(state, SearchIntent::TranslationChanged);
        assert_eq!(state.submitted, None);
        assert_eq!(state.input, "lo");
    }
}
