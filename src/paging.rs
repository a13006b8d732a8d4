//! 1-based pagination over an in-memory list.

use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}

/// Page arithmetic for `total_items` split into pages of `page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(total_items: usize, page_size: usize) -> Result<Self, PagingError> {
        if page_size == 0 {
            return Err(PagingError::ZeroPageSize);
        }
        Ok(Self {
            total_items,
            page_size,
        })
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Item range on `page`, or `None` for page 0 or a page past the end.
    pub fn page_range(&self, page: usize) -> Option<Range<usize>> {
        if page == 0 || page > self.total_pages() {
            return None;
        }
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_items);
        Some(start..end)
    }

    pub fn page_items<'a, T>(&self, items: &'a [T], page: usize) -> Option<&'a [T]> {
        let range = self.page_range(page)?;
        items.get(range)
    }
}

/// Stateful page cursor. Moving past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    paginator: Paginator,
    page: usize,
}

impl Pager {
    pub fn new(total_items: usize, page_size: usize) -> Result<Self, PagingError> {
        Ok(Self {
            paginator: Paginator::new(total_items, page_size)?,
            page: 1,
        })
    }

    /// Current page, 1-based. Stays 1 for an empty list.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    pub fn paginator(&self) -> Paginator {
        self.paginator
    }

    /// Replace the item count, keeping the page when it still exists.
    pub fn set_total(&mut self, total_items: usize) {
        self.paginator.total_items = total_items;
        let last = self.total_pages().max(1);
        self.page = self.page.min(last);
    }

    pub fn range(&self) -> Range<usize> {
        self.paginator.page_range(self.page).unwrap_or(0..0)
    }

    pub fn items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.paginator.page_items(items, self.page).unwrap_or(&[])
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Jump to `page`. Out-of-range pages are rejected and leave the
    /// cursor where it was.
    pub fn go_to(&mut self, page: usize) -> bool {
        if self.paginator.page_range(page).is_none() {
            return false;
        }
        self.page = page;
        true
    }
}
