//! Page requests and page results.
//!
//! Pages are 1-indexed everywhere: page `1` starts at offset `0`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Result<Self, CoreError> {
        if page == 0 {
            return Err(CoreError::InvalidPagination(
                "page starts at 1".to_string(),
            ));
        }

        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(CoreError::InvalidPagination(format!(
                "size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }

        // the end of the page must fit a signed SQL OFFSET/LIMIT
        let within_range = page
            .checked_mul(size)
            .is_some_and(|end| end <= i64::MAX as u64);
        if !within_range {
            return Err(CoreError::InvalidPagination(format!(
                "page {page} is out of range"
            )));
        }

        Ok(Self { page, size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// How the total of a paged search is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CountStrategy {
    /// Count the content query as is, joins included.
    Combined,
    /// Build a dedicated count query that only joins what its predicates need,
    /// and skip it entirely when the page itself reveals the total.
    #[default]
    Separate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

/// Derives the total from the fetched page when it is short, so the count
/// query can be skipped. Returns `None` when a count query is required.
pub fn resolve_total(request: PageRequest, fetched: usize) -> Option<u64> {
    let fetched = fetched as u64;

    if fetched == 0 {
        return (request.offset() == 0).then_some(0);
    }

    (fetched < request.size()).then(|| request.offset() + fetched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_one_indexed() {
        let request = PageRequest::new(1, 10).unwrap();
        assert_eq!(request.offset(), 0);

        let request = PageRequest::new(2, 2).unwrap();
        assert_eq!(request.offset(), 2);

        let request = PageRequest::new(5, 20).unwrap();
        assert_eq!(request.offset(), 80);
    }

    #[test]
    fn test_rejects_zero_page() {
        assert!(matches!(
            PageRequest::new(0, 10),
            Err(CoreError::InvalidPagination(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_size() {
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE + 1).is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).is_ok());
    }

    #[test]
    fn test_rejects_page_beyond_addressable_offset() {
        assert!(matches!(
            PageRequest::new(u64::MAX / 2, 10),
            Err(CoreError::InvalidPagination(_))
        ));
        assert!(PageRequest::new(u64::MAX, 1).is_err());

        let last = PageRequest::new(i64::MAX as u64 / 100, 100).unwrap();
        assert_eq!(last.offset(), (i64::MAX as u64 / 100 - 1) * 100);
    }

    #[test]
    fn test_resolve_total_on_short_first_page() {
        let request = PageRequest::new(1, 10).unwrap();
        assert_eq!(resolve_total(request, 3), Some(3));
        assert_eq!(resolve_total(request, 0), Some(0));
    }

    #[test]
    fn test_resolve_total_on_short_later_page() {
        let request = PageRequest::new(3, 10).unwrap();
        assert_eq!(resolve_total(request, 4), Some(24));
    }

    #[test]
    fn test_resolve_total_needs_count() {
        let full = PageRequest::new(1, 2).unwrap();
        assert_eq!(resolve_total(full, 2), None);

        let past_the_end = PageRequest::new(4, 10).unwrap();
        assert_eq!(resolve_total(past_the_end, 0), None);
    }

    #[test]
    fn test_total_pages() {
        let request = PageRequest::new(1, 3).unwrap();
        let page = Page::new(vec![1, 2, 3], request, 4);
        assert_eq!(page.total_pages(), 2);

        let empty: Page<i32> = Page::new(vec![], request, 0);
        assert_eq!(empty.total_pages(), 0);
    }
}
