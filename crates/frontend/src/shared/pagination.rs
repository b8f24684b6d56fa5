//! Client-side paging over an already loaded list

use super::config::DEFAULT_PAGE_SIZE;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    /// Current page (0-indexed)
    pub page: usize,
    pub page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Paginator {
    pub fn total_pages(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        total.div_ceil(self.page_size)
    }

    /// Current page, pulled back onto the last page when the list shrank
    /// underneath it (e.g. after a delete and re-fetch).
    pub fn effective_page(&self, total: usize) -> usize {
        self.page.min(self.total_pages(total).saturating_sub(1))
    }

    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.effective_page(total) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.min(self.total_pages(total).saturating_sub(1));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// "11-20 of 25"
    pub fn summary(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("0 of {}", total);
        }
        format!("{}-{} of {}", range.start + 1, range.end, total)
    }
}
