use std::collections::HashMap;

use crate::api::{Book, Chapter, ChapterContent, ChapterLink, SearchResult, Translation};
use crate::config::UiConfig;
use crate::mvi::Reducer;
use crate::paging::{Pager, Paginator, PagingError};
use crate::query::{FetchPlan, QueryError, QueryKey, Resource};
use crate::selection::{Selection, SelectionStore};
use crate::testament::{books_for_tab, Testament};
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crate::ui::status::ViewStatus;

const CONTENT_PAGE_LINES: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Translation picker.
    Home,
    Reader,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderFocus {
    Books,
    Chapters,
    Content,
}

impl ReaderFocus {
    fn next(self) -> Self {
        match self {
            ReaderFocus::Books => ReaderFocus::Chapters,
            ReaderFocus::Chapters => ReaderFocus::Content,
            ReaderFocus::Content => ReaderFocus::Books,
        }
    }
}

/// Screen-independent user actions produced by the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Select,
    Back,
    CycleFocus,
    NextChapter,
    PrevChapter,
    ToggleTestament,
    OpenSearch,
    Refresh,
    Input(char),
    Backspace,
    ClearInput,
}

/// Work the runtime must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Drop cached results and fetch the current plan again.
    Refresh,
}

pub struct App {
    store: SelectionStore,
    screen: Screen,
    focus: ReaderFocus,
    plan: FetchPlan,
    loads: HashMap<QueryKey, ViewStatus<Resource>>,
    page_size: usize,
    translation_pager: Pager,
    translation_cursor: usize,
    book_tab: Testament,
    book_cursor: usize,
    chapter_cursor: usize,
    content_scroll: u16,
    search: SearchState,
    pending_translation: Option<String>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(store: SelectionStore, ui: &UiConfig) -> Result<Self, PagingError> {
        Ok(Self {
            store,
            screen: Screen::Home,
            focus: ReaderFocus::Books,
            plan: FetchPlan::default(),
            loads: HashMap::new(),
            page_size: ui.page_size,
            translation_pager: Pager::new(0, ui.page_size)?,
            translation_cursor: 0,
            book_tab: Testament::Old,
            book_cursor: 0,
            chapter_cursor: 0,
            content_scroll: 0,
            search: SearchState::default(),
            pending_translation: ui.default_translation.clone(),
            notice: None,
            should_quit: false,
        })
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn focus(&self) -> ReaderFocus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn plan(&self) -> &FetchPlan {
        &self.plan
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn book_tab(&self) -> Testament {
        self.book_tab
    }

    pub fn book_cursor(&self) -> usize {
        self.book_cursor
    }

    pub fn chapter_cursor(&self) -> usize {
        self.chapter_cursor
    }

    pub fn content_scroll(&self) -> u16 {
        self.content_scroll
    }

    pub fn translation_pager(&self) -> &Pager {
        &self.translation_pager
    }

    pub fn translation_cursor(&self) -> usize {
        self.translation_cursor
    }

    /// Re-derive the fetch plan from the current state.
    ///
    /// Statuses for keys that left the plan are dropped. Returns the keys
    /// that have no status yet; they are marked `Loading` and the caller
    /// must fetch them and report back through [`App::on_fetched`].
    pub fn sync(&mut self) -> Vec<QueryKey> {
        let selection = self.store.selection();
        let plan = FetchPlan::derive(&selection, self.search.submitted.as_ref());
        self.loads.retain(|key, _| plan.is_relevant(key));

        let mut dispatch = Vec::new();
        for key in plan.keys() {
            if self.loads.contains_key(key) {
                continue;
            }
            self.loads.insert(key.clone(), ViewStatus::Loading);
            dispatch.push(key.clone());
        }

        self.plan = plan;
        self.publish_session_flags();
        dispatch
    }

    /// Mirror the planned statuses into the session: loading while any
    /// planned key is in flight, and the first failure in plan order.
    fn publish_session_flags(&self) {
        let statuses = self.plan.keys().iter().filter_map(|key| self.loads.get(key));
        let mut loading = false;
        let mut error = None;
        for status in statuses {
            match status {
                ViewStatus::Loading => loading = true,
                ViewStatus::Failed(message) if error.is_none() => error = Some(message.clone()),
                _ => {}
            }
        }
        self.store.set_loading(loading);
        self.store.set_error(error);
    }

    /// Record a settled fetch. Returns `false` when the result is stale and
    /// was ignored.
    pub fn on_fetched(&mut self, key: QueryKey, result: Result<Resource, QueryError>) -> bool {
        if !self.plan.is_relevant(&key) {
            tracing::debug!(query = %key, "Ignoring result for a query no longer needed");
            return false;
        }

        let status = match result {
            Ok(resource) if resource.is_empty() => ViewStatus::Empty,
            Ok(resource) => ViewStatus::Ready(resource),
            Err(err) => {
                tracing::warn!(query = %key, error = %err, "Query failed");
                ViewStatus::Failed(err.user_message(key.kind()))
            }
        };

        if let (Some(current), ViewStatus::Ready(Resource::Chapters(chapters))) =
            (self.store.chapter(), &status)
        {
            if let Some(index) = chapters.iter().position(|c| c.id == current.id) {
                self.chapter_cursor = index;
            }
        }

        self.loads.insert(key.clone(), status);
        self.publish_session_flags();

        if key == QueryKey::Translations {
            let total = self.translations().ready().map_or(0, |items| items.len());
            self.translation_pager.set_total(total);
            self.apply_default_translation();
        }
        true
    }

    /// Forget every status so the next [`App::sync`] fetches the whole plan.
    pub fn reset_loads(&mut self) {
        self.loads.clear();
        self.notice = None;
    }

    fn status(&self, key: Option<&QueryKey>) -> ViewStatus<&Resource> {
        key.and_then(|key| self.loads.get(key))
            .map(ViewStatus::as_ref)
            .unwrap_or_default()
    }

    pub fn translations(&self) -> ViewStatus<&[Translation]> {
        self.status(Some(&QueryKey::Translations))
            .and_then(|resource| match resource {
                Resource::Translations(items) => Some(items.as_slice()),
                _ => None,
            })
    }

    pub fn books(&self) -> ViewStatus<&[Book]> {
        let selection = self.store.selection();
        let key = QueryKey::books(selection.translation_id());
        self.status(key.as_ref()).and_then(|resource| match resource {
            Resource::Books(items) => Some(items.as_slice()),
            _ => None,
        })
    }

    /// Books on the active testament tab, or all books if the tab is empty.
    pub fn tab_books(&self) -> Vec<Book> {
        self.books()
            .ready()
            .map(|books| books_for_tab(books, self.book_tab))
            .unwrap_or_default()
    }

    pub fn chapters(&self) -> ViewStatus<&[Chapter]> {
        let selection = self.store.selection();
        let key = QueryKey::chapters(selection.translation_id(), selection.book_id());
        self.status(key.as_ref()).and_then(|resource| match resource {
            Resource::Chapters(items) => Some(items.as_slice()),
            _ => None,
        })
    }

    pub fn content(&self) -> ViewStatus<&ChapterContent> {
        let selection = self.store.selection();
        let key = QueryKey::chapter_content(selection.translation_id(), selection.chapter_id());
        self.status(key.as_ref()).and_then(|resource| match resource {
            Resource::ChapterContent(content) => Some(content),
            _ => None,
        })
    }

    pub fn search_results(&self) -> ViewStatus<&[SearchResult]> {
        let key = self.search.submitted.as_ref().and_then(|request| {
            QueryKey::search(Some(&request.translation_id), &request.query)
        });
        let key = key.filter(|key| self.plan.is_relevant(key));
        self.status(key.as_ref()).and_then(|resource| match resource {
            Resource::Search(results) => Some(results.verses.as_slice()),
            _ => None,
        })
    }

    pub fn search_paginator(&self) -> Option<Paginator> {
        let total = self.search_results().ready().map(|hits| hits.len())?;
        Paginator::new(total, self.page_size).ok()
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => {
                self.should_quit = true;
                return Effect::None;
            }
            Action::Refresh => {
                self.reset_loads();
                return Effect::Refresh;
            }
            _ => {}
        }

        self.notice = None;
        match self.screen {
            Screen::Home => self.apply_home(action),
            Screen::Reader => self.apply_reader(action),
            Screen::Search => self.apply_search(action),
        }
        Effect::None
    }

    fn apply_home(&mut self, action: Action) {
        let on_page = self.translation_pager.range().len();
        match action {
            Action::Up => self.translation_cursor = self.translation_cursor.saturating_sub(1),
            Action::Down => {
                if self.translation_cursor + 1 < on_page {
                    self.translation_cursor += 1;
                }
            }
            Action::Left | Action::PageUp => {
                if self.translation_pager.prev() {
                    self.translation_cursor = 0;
                }
            }
            Action::Right | Action::PageDown => {
                if self.translation_pager.next() {
                    self.translation_cursor = 0;
                }
            }
            Action::Select => {
                let index = self.translation_pager.range().start + self.translation_cursor;
                let picked = self
                    .translations()
                    .ready()
                    .and_then(|items| items.get(index).cloned());
                if let Some(translation) = picked {
                    self.choose_translation(translation);
                }
            }
            Action::CycleFocus => {
                if self.store.translation().is_some() {
                    self.screen = Screen::Reader;
                }
            }
            Action::OpenSearch => self.open_search(),
            _ => {}
        }
    }

    fn apply_reader(&mut self, action: Action) {
        match action {
            Action::CycleFocus => self.focus = self.focus.next(),
            Action::NextChapter => self.step_chapter(true),
            Action::PrevChapter => self.step_chapter(false),
            Action::OpenSearch => self.open_search(),
            Action::Back => match self.focus {
                ReaderFocus::Content => {
                    self.store.clear_chapter();
                    self.content_scroll = 0;
                    self.focus = ReaderFocus::Chapters;
                }
                ReaderFocus::Chapters => {
                    self.store.clear_book();
                    self.chapter_cursor = 0;
                    self.focus = ReaderFocus::Books;
                }
                ReaderFocus::Books => self.screen = Screen::Home,
            },
            _ => match self.focus {
                ReaderFocus::Books => self.apply_books(action),
                ReaderFocus::Chapters => self.apply_chapters(action),
                ReaderFocus::Content => self.apply_content(action),
            },
        }
    }

    fn apply_books(&mut self, action: Action) {
        let books = self.tab_books();
        match action {
            Action::Up => self.book_cursor = self.book_cursor.saturating_sub(1),
            Action::Down => {
                if self.book_cursor + 1 < books.len() {
                    self.book_cursor += 1;
                }
            }
            Action::Left | Action::Right | Action::ToggleTestament => {
                self.book_tab = self.book_tab.other();
                self.book_cursor = 0;
            }
            Action::Select => {
                if let Some(book) = books.get(self.book_cursor).cloned() {
                    match self.store.select_book(book) {
                        Ok(_) => {
                            self.chapter_cursor = 0;
                            self.content_scroll = 0;
                            self.focus = ReaderFocus::Chapters;
                        }
                        Err(err) => self.notice = Some(err.to_string()),
                    }
                }
            }
            _ => {}
        }
    }

    fn apply_chapters(&mut self, action: Action) {
        let count = self.chapters().ready().map_or(0, |items| items.len());
        match action {
            Action::Up => self.chapter_cursor = self.chapter_cursor.saturating_sub(1),
            Action::Down => {
                if self.chapter_cursor + 1 < count {
                    self.chapter_cursor += 1;
                }
            }
            Action::Select => {
                let picked = self
                    .chapters()
                    .ready()
                    .and_then(|items| items.get(self.chapter_cursor).cloned());
                if let Some(chapter) = picked {
                    self.select_chapter(chapter);
                }
            }
            _ => {}
        }
    }

    fn apply_content(&mut self, action: Action) {
        self.content_scroll = match action {
            Action::Up => self.content_scroll.saturating_sub(1),
            Action::Down => self.content_scroll.saturating_add(1),
            Action::PageUp => self.content_scroll.saturating_sub(CONTENT_PAGE_LINES),
            Action::PageDown => self.content_scroll.saturating_add(CONTENT_PAGE_LINES),
            _ => self.content_scroll,
        };
    }

    fn apply_search(&mut self, action: Action) {
        let intent = match action {
            Action::Input(ch) => SearchIntent::Input(ch),
            Action::Backspace => SearchIntent::Backspace,
            Action::ClearInput => SearchIntent::ClearInput,
            Action::Select => {
                if self.search.input.trim().is_empty() {
                    self.notice = Some("Enter a search term.".to_string());
                    return;
                }
                SearchIntent::Submit {
                    translation_id: self.store.selection().translation_id().map(str::to_string),
                }
            }
            Action::PageDown | Action::Down => SearchIntent::NextPage {
                total_pages: self.search_paginator().map_or(0, |p| p.total_pages()),
            },
            Action::PageUp | Action::Up => SearchIntent::PrevPage,
            Action::Back => {
                self.screen = if self.store.translation().is_some() {
                    Screen::Reader
                } else {
                    Screen::Home
                };
                return;
            }
            _ => return,
        };
        self.search = SearchReducer::reduce(std::mem::take(&mut self.search), intent);
    }

    fn open_search(&mut self) {
        if self.store.translation().is_some() {
            self.screen = Screen::Search;
        } else {
            self.notice = Some("Select a translation to search.".to_string());
        }
    }

    fn choose_translation(&mut self, translation: Translation) {
        let changed = self.store.selection().translation_id() != Some(translation.id.as_str());
        self.store.select_translation(Some(translation));
        if changed {
            self.search =
                SearchReducer::reduce(std::mem::take(&mut self.search), SearchIntent::TranslationChanged);
        }
        self.book_cursor = 0;
        self.chapter_cursor = 0;
        self.content_scroll = 0;
        self.focus = ReaderFocus::Books;
        self.screen = Screen::Reader;
    }

    fn apply_default_translation(&mut self) {
        if self.store.translation().is_some() {
            return;
        }
        let Some(wanted) = self.pending_translation.take() else {
            return;
        };
        let found = self
            .translations()
            .ready()
            .and_then(|items| items.iter().find(|t| t.id == wanted).cloned());
        match found {
            Some(translation) => self.choose_translation(translation),
            None => {
                tracing::warn!(translation = %wanted, "Default translation not available");
                self.notice = Some(format!("Default translation '{}' is not available.", wanted));
            }
        }
    }

    fn select_chapter(&mut self, chapter: Chapter) {
        match self.store.select_chapter(chapter) {
            Ok(_) => {
                self.content_scroll = 0;
                self.focus = ReaderFocus::Content;
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    /// Move to the next or previous chapter, preferring the links reported
    /// with the chapter content and falling back to the chapter list.
    fn step_chapter(&mut self, forward: bool) {
        let selection = self.store.selection();
        let Some(current) = selection.chapter().cloned() else {
            self.notice = Some("Select a chapter first.".to_string());
            return;
        };

        let link = self.content().ready().and_then(|content| {
            if forward {
                content.next.clone()
            } else {
                content.previous.clone()
            }
        });
        if let Some(link) = link {
            self.follow_link(&selection, link);
            return;
        }

        let neighbor = self.chapters().ready().and_then(|chapters| {
            let index = chapters.iter().position(|c| c.id == current.id)?;
            let target = if forward {
                index.checked_add(1)?
            } else {
                index.checked_sub(1)?
            };
            chapters.get(target).cloned().map(|c| (target, c))
        });
        match neighbor {
            Some((index, chapter)) => {
                self.chapter_cursor = index;
                self.select_chapter(chapter);
            }
            None => {
                self.notice = Some(if forward {
                    "This is the last chapter.".to_string()
                } else {
                    "This is the first chapter.".to_string()
                });
            }
        }
    }

    fn follow_link(&mut self, selection: &Selection, link: ChapterLink) {
        let Some(translation_id) = selection.translation_id().map(str::to_string) else {
            return;
        };

        if selection.book_id() != Some(link.book_id.as_str()) {
            let book = self
                .books()
                .ready()
                .and_then(|books| books.iter().find(|b| b.id == link.book_id).cloned());
            let Some(book) = book else {
                self.notice = Some(format!("Book {} is not available.", link.book_id));
                return;
            };
            if let Err(err) = self.store.select_book(book) {
                self.notice = Some(err.to_string());
                return;
            }
            self.chapter_cursor = 0;
        }

        let known = self.chapters().ready().and_then(|chapters| {
            chapters
                .iter()
                .position(|c| c.id == link.id)
                .map(|index| (index, chapters[index].clone()))
        });
        let chapter = match known {
            Some((index, chapter)) => {
                self.chapter_cursor = index;
                chapter
            }
            None => Chapter {
                id: link.id,
                bible_id: translation_id,
                book_id: link.book_id,
                number: link.number,
                reference: String::new(),
            },
        };
        self.select_chapter(chapter);
    }
}
