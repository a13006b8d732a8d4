//! Old/New Testament classification for book lists.

use crate::api::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Testament {
    #[default]
    Old,
    New,
}

impl Testament {
    pub fn label(&self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Testament::Old => Testament::New,
            Testament::New => Testament::Old,
        }
    }
}

const NEW_TESTAMENT_IDS: [&str; 27] = [
    "MAT", "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP", "COL", "1TH",
    "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE", "2PE", "1JN", "2JN", "3JN", "JUD",
    "REV",
];

// Matched against the start of the display name when the id is unknown.
// Names in other languages fall through to Old.
const NEW_TESTAMENT_NAME_PREFIXES: [&str; 20] = [
    "Matt", "Mark", "Luke", "John", "Acts", "Roma", "Corin", "Galat", "Ephes", "Philip",
    "Coloss", "Thess", "Timot", "Titus", "Philem", "Hebre", "James", "Peter", "Jude", "Revel",
];

/// Classify a book by id, then by name prefix. Anything else is Old.
pub fn classify(id: &str, name: &str) -> Testament {
    if NEW_TESTAMENT_IDS.contains(&id) {
        return Testament::New;
    }
    if NEW_TESTAMENT_NAME_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
    {
        return Testament::New;
    }
    Testament::Old
}

pub fn classify_book(book: &Book) -> Testament {
    classify(&book.id, &book.name)
}

/// Partition `books` into (old, new), keeping the provider's order.
pub fn split_by_testament(books: &[Book]) -> (Vec<Book>, Vec<Book>) {
    books
        .iter()
        .cloned()
        .partition(|book| classify_book(book) == Testament::Old)
}

/// Books for a testament tab. Falls back to the full list when the tab
/// would be empty, so an unclassifiable translation stays browsable.
pub fn books_for_tab(books: &[Book], testament: Testament) -> Vec<Book> {
    let (old, new) = split_by_testament(books);
    let tab = match testament {
        Testament::Old => old,
        Testament::New => new,
    };
    if tab.is_empty() {
        books.to_vec()
    } else {
        tab
    }
}
