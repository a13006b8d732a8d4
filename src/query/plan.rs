use crate::query::key::QueryKey;
use crate::selection::Selection;

/// A submitted search, bound to the translation it was typed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub translation_id: String,
    pub query: String,
}

impl SearchRequest {
    pub fn new(translation_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            translation_id: translation_id.into(),
            query: query.into(),
        }
    }
}

/// Resources the current state needs, in dependency order.
///
/// Re-derived after every state change. A fetch result whose key is not in
/// the current plan is stale and must be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchPlan {
    keys: Vec<QueryKey>,
}

impl FetchPlan {
    pub fn derive(selection: &Selection, search: Option<&SearchRequest>) -> Self {
        let translation_id = selection.translation_id();
        let mut keys = vec![QueryKey::Translations];

        keys.extend(QueryKey::books(translation_id));
        keys.extend(QueryKey::chapters(translation_id, selection.book_id()));
        keys.extend(QueryKey::chapter_content(
            translation_id,
            selection.chapter_id(),
        ));

        if let Some(request) = search {
            if translation_id == Some(request.translation_id.as_str()) {
                keys.extend(QueryKey::search(translation_id, &request.query));
            }
        }

        Self { keys }
    }

    pub fn keys(&self) -> &[QueryKey] {
        &self.keys
    }

    pub fn is_relevant(&self, key: &QueryKey) -> bool {
        self.keys.contains(key)
    }

    /// Keys in `self` that `previous` did not already request.
    pub fn added_since<'a>(&'a self, previous: &'a FetchPlan) -> impl Iterator<Item = &'a QueryKey> {
        self.keys.iter().filter(move |key| !previous.is_relevant(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Book, Chapter, Language, Translation};

    fn translation(id: &str) -> Translation {
        Translation {
            id: id.to_string(),
            abbreviation: id.to_uppercase(),
            name: format!("Translation {}", id),
            language: Language {
                id: "eng".to_string(),
                name: "English".to_string(),
                name_local: None,
            },
            abbreviation_local: None,
            name_local: None,
            description: None,
        }
    }

    fn book(translation_id: &str, id: &str) -> Book {
        Book {
            id: id.to_string(),
            bible_id: translation_id.to_string(),
            abbreviation: id.to_string(),
            name: id.to_string(),
            name_long: id.to_string(),
        }
    }

    fn chapter(translation_id: &str, book_id: &str, number: u32) -> Chapter {
        Chapter {
            id: format!("{}.{}", book_id, number),
            bible_id: translation_id.to_string(),
            book_id: book_id.to_string(),
            number: number.to_string(),
            reference: format!("{} {}", book_id, number),
        }
    }

    #[test]
    fn empty_selection_needs_translations_only() {
        let plan = FetchPlan::derive(&Selection::Empty, None);
        assert_eq!(plan.keys(), &[QueryKey::Translations]);
    }

    #[test]
    fn chapter_selection_lists_keys_in_dependency_order() {
        let selection = Selection::Chapter {
            translation: translation("t1"),
            book: book("t1", "GEN"),
            chapter: chapter("t1", "GEN", 1),
        };
        let plan = FetchPlan::derive(&selection, None);
        let rendered: Vec<String> = plan.keys().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "translations",
                "books/t1",
                "chapters/t1/GEN",
                "chapterContent/t1/GEN.1"
            ]
        );
    }

    #[test]
    fn search_for_another_translation_is_not_planned() {
        let selection = Selection::Translation {
            translation: translation("t1"),
        };
        let other = SearchRequest::new("t2", "love");
        let plan = FetchPlan::derive(&selection, Some(&other));
        assert!(plan.keys().iter().all(|k| !matches!(k, QueryKey::Search { .. })));

        let same = SearchRequest::new("t1", "love");
        let plan = FetchPlan::derive(&selection, Some(&same));
        assert_eq!(
            plan.keys().last(),
            Some(&QueryKey::Search {
                translation_id: "t1".to_string(),
                query: "love".to_string()
            })
        );
    }

    #[test]
    fn changing_chapter_adds_only_the_new_content() {
        let first = Selection::Chapter {
            translation: translation("t1"),
            book: book("t1", "GEN"),
            chapter: chapter("t1", "GEN", 1),
        };
        let second = Selection::Chapter {
            translation: translation("t1"),
            book: book("t1", "GEN"),
            chapter: chapter("t1", "GEN", 2),
        };
        let before = FetchPlan::derive(&first, None);
        let after = FetchPlan::derive(&second, None);

        let added: Vec<&QueryKey> = after.added_since(&before).collect();
        assert_eq!(
            added,
            vec![&QueryKey::ChapterContent {
                translation_id: "t1".to_string(),
                chapter_id: "GEN.2".to_string()
            }]
        );
        assert!(!after.is_relevant(&QueryKey::ChapterContent {
            translation_id: "t1".to_string(),
            chapter_id: "GEN.1".to_string()
        }));
    }
}
