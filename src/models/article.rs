//! Article model
//!
//! This module provides:
//! - `Article` entity representing a generated content item
//! - Pagination types for list queries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Article entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Unique identifier, sequential from 1
    pub id: i64,
    /// Article title
    pub title: String,
    /// Cover image URL
    pub cover: String,
    /// Author display name
    pub author_name: String,
    /// Author avatar URL
    pub author_avatar: String,
    /// Publication date as `YYYY-MM-DD`
    pub date: String,
    /// Tag identifiers, deduplicated in first-seen order
    pub tag_ids: Vec<i64>,
    /// View count
    pub views: i64,
}

impl Article {
    /// Parse `date` into a calendar date.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Check whether the article carries the given tag
    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tag_ids.contains(&tag_id)
    }
}

/// Pagination parameters for list queries
///
/// Values are kept as given; out-of-range inputs are clamped when the
/// offset and limit are computed, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-indexed)
    pub page: i64,
    /// Number of items per page
    pub per_page: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
        }
    }
}

impl ListParams {
    /// Create new pagination parameters
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// Offset of the first item; pages below 1 map to offset 0
    pub fn offset(&self) -> usize {
        let offset = self.page.saturating_sub(1).saturating_mul(self.limit() as i64);
        usize::try_from(offset.max(0)).unwrap_or(usize::MAX)
    }

    /// Maximum number of items on the page; non-positive sizes give 0
    pub fn limit(&self) -> usize {
        usize::try_from(self.per_page.max(0)).unwrap_or(usize::MAX)
    }

    /// Slice `items` down to this page
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit()).min(items.len());
        &items[start..end]
    }
}

/// Paginated result container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    /// Items in the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Requested page number
    pub page: i64,
    /// Requested page size
    pub per_page: i64,
}

impl<T> PagedResult<T> {
    /// Create a new paginated result
    pub fn new(items: Vec<T>, total: usize, params: &ListParams) -> Self {
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
        }
    }

    /// Calculate the total number of pages
    pub fn total_pages(&self) -> usize {
        if self.per_page <= 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page as usize)
    }

    /// Check if there is a next page
    pub fn has_next(&self) -> bool {
        self.page.max(1) < self.total_pages() as i64
    }

    /// Check if there is a previous page
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check if the result is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items in the current page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Map the page items, keeping the pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            per_page: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(date: &str) -> Article {
        Article {
            id: 1,
            title: "t".to_string(),
            cover: String::new(),
            author_name: String::new(),
            author_avatar: String::new(),
            date: date.to_string(),
            tag_ids: vec![2, 4],
            views: 63,
        }
    }

    #[test]
    fn test_published_on() {
        assert_eq!(
            article("2024-06-16").published_on(),
            NaiveDate::from_ymd_opt(2024, 6, 16)
        );
        assert_eq!(article("not a date").published_on(), None);
    }

    #[test]
    fn test_has_tag() {
        let a = article("2024-01-01");
        assert!(a.has_tag(4));
        assert!(!a.has_tag(1));
    }

    #[test]
    fn test_list_params_offset() {
        assert_eq!(ListParams::new(1, 10).offset(), 0);
        assert_eq!(ListParams::new(3, 10).offset(), 20);
        assert_eq!(ListParams::new(0, 10).offset(), 0);
        assert_eq!(ListParams::new(-5, 10).offset(), 0);
    }

    #[test]
    fn test_list_params_non_positive_size() {
        assert_eq!(ListParams::new(2, 0).limit(), 0);
        assert_eq!(ListParams::new(2, -3).limit(), 0);
        assert_eq!(ListParams::new(2, -3).offset(), 0);
    }

    #[test]
    fn test_list_params_apply() {
        let items: Vec<i32> = (1..=7).collect();

        assert_eq!(ListParams::new(1, 3).apply(&items), &[1, 2, 3]);
        assert_eq!(ListParams::new(3, 3).apply(&items), &[7]);
        assert!(ListParams::new(4, 3).apply(&items).is_empty());
        assert!(ListParams::new(1, 0).apply(&items).is_empty());
        assert!(ListParams::new(i64::MAX, i64::MAX).apply(&items).is_empty());
    }

    #[test]
    fn test_paged_result_navigation() {
        let params = ListParams::new(2, 10);
        let result = PagedResult::new(vec![0; 10], 25, &params);

        assert_eq!(result.total_pages(), 3);
        assert!(result.has_next());
        assert!(result.has_prev());
        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_paged_result_zero_page_size() {
        let result: PagedResult<i32> = PagedResult::new(vec![], 25, &ListParams::new(1, 0));

        assert_eq!(result.total_pages(), 0);
        assert!(!result.has_next());
        assert!(result.is_empty());
    }

    #[test]
    fn test_paged_result_map() {
        let result = PagedResult::new(vec![1, 2], 5, &ListParams::new(1, 2));
        let mapped = result.map(|n| n * 10);

        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total, 5);
    }
}
