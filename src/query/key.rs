use std::fmt;

/// Identity of a cacheable fetch: resource kind plus every parameter that
/// affects the result.
///
/// The `Option` constructors return `None` while a required parameter is
/// missing; such a query is disabled and never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Translations,
    Books {
        translation_id: String,
    },
    Chapters {
        translation_id: String,
        book_id: String,
    },
    ChapterContent {
        translation_id: String,
        chapter_id: String,
    },
    Verses {
        translation_id: String,
        chapter_id: String,
    },
    Verse {
        translation_id: String,
        verse_id: String,
    },
    Search {
        translation_id: String,
        query: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Translations,
    Books,
    Chapters,
    ChapterContent,
    Verses,
    Verse,
    Search,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Translations,
        ResourceKind::Books,
        ResourceKind::Chapters,
        ResourceKind::ChapterContent,
        ResourceKind::Verses,
        ResourceKind::Verse,
        ResourceKind::Search,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Translations => "Bible list",
            ResourceKind::Books => "Book",
            ResourceKind::Chapters => "Chapter list",
            ResourceKind::ChapterContent => "Chapter",
            ResourceKind::Verses => "Verse list",
            ResourceKind::Verse => "Verse",
            ResourceKind::Search => "Search",
        }
    }

    /// Generic message for a failure that is not an auth problem.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ResourceKind::Translations => "Failed to load Bibles. Please try again later.",
            ResourceKind::Books => "Failed to load books. Please try again.",
            ResourceKind::Chapters => "Failed to load chapters.",
            ResourceKind::ChapterContent => {
                "Failed to load scripture content. Please try again."
            }
            ResourceKind::Verses => "Failed to load verses.",
            ResourceKind::Verse => "Failed to load verse.",
            ResourceKind::Search => "Failed to search. Please try again.",
        }
    }
}

fn present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl QueryKey {
    pub fn books(translation_id: Option<&str>) -> Option<Self> {
        Some(QueryKey::Books {
            translation_id: present(translation_id)?,
        })
    }

    pub fn chapters(translation_id: Option<&str>, book_id: Option<&str>) -> Option<Self> {
        Some(QueryKey::Chapters {
            translation_id: present(translation_id)?,
            book_id: present(book_id)?,
        })
    }

    pub fn chapter_content(translation_id: Option<&str>, chapter_id: Option<&str>) -> Option<Self> {
        Some(QueryKey::ChapterContent {
            translation_id: present(translation_id)?,
            chapter_id: present(chapter_id)?,
        })
    }

    pub fn verses(translation_id: Option<&str>, chapter_id: Option<&str>) -> Option<Self> {
        Some(QueryKey::Verses {
            translation_id: present(translation_id)?,
            chapter_id: present(chapter_id)?,
        })
    }

    pub fn verse(translation_id: Option<&str>, verse_id: Option<&str>) -> Option<Self> {
        Some(QueryKey::Verse {
            translation_id: present(translation_id)?,
            verse_id: present(verse_id)?,
        })
    }

    /// Search is keyed by the trimmed query; a blank query is disabled.
    pub fn search(translation_id: Option<&str>, query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        Some(QueryKey::Search {
            translation_id: present(translation_id)?,
            query: query.to_string(),
        })
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            QueryKey::Translations => ResourceKind::Translations,
            QueryKey::Books { .. } => ResourceKind::Books,
            QueryKey::Chapters { .. } => ResourceKind::Chapters,
            QueryKey::ChapterContent { .. } => ResourceKind::ChapterContent,
            QueryKey::Verses { .. } => ResourceKind::Verses,
            QueryKey::Verse { .. } => ResourceKind::Verse,
            QueryKey::Search { .. } => ResourceKind::Search,
        }
    }

    pub fn translation_id(&self) -> Option<&str> {
        match self {
            QueryKey::Translations => None,
            QueryKey::Books { translation_id }
            | QueryKey::Chapters { translation_id, .. }
            | QueryKey::ChapterContent { translation_id, .. }
            | QueryKey::Verses { translation_id, .. }
            | QueryKey::Verse { translation_id, .. }
            | QueryKey::Search { translation_id, .. } => Some(translation_id),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Translations => write!(f, "translations"),
            QueryKey::Books { translation_id } => write!(f, "books/{}", translation_id),
            QueryKey::Chapters {
                translation_id,
                book_id,
            } => write!(f, "chapters/{}/{}", translation_id, book_id),
            QueryKey::ChapterContent {
                translation_id,
                chapter_id,
            } => write!(f, "chapterContent/{}/{}", translation_id, chapter_id),
            QueryKey::Verses {
                translation_id,
                chapter_id,
            } => write!(f, "verses/{}/{}", translation_id, chapter_id),
            QueryKey::Verse {
                translation_id,
                verse_id,
            } => write!(f, "verse/{}/{}", translation_id, verse_id),
            QueryKey::Search {
                translation_id,
                query,
            } => write!(f, "search/{}?{}", translation_id, query),
        }
    }
}
