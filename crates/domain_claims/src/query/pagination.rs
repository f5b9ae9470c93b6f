//! Page slicing for the claims list

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::ops::Range;

/// Rows per page in the claims table
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(25) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};

/// First page
pub const FIRST_PAGE: NonZeroUsize = NonZeroUsize::MIN;

/// Number of pages needed for `total_items`; zero for an empty list
pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Index range of a 1-based page, clipped to `total_items`
///
/// Pages past the end yield an empty range.
pub fn page_bounds(total_items: usize, page: NonZeroUsize, page_size: NonZeroUsize) -> Range<usize> {
    let start = (page.get() - 1).saturating_mul(page_size.get());
    if start >= total_items {
        return total_items..total_items;
    }
    let end = start.saturating_add(page_size.get()).min(total_items);
    start..end
}

/// Position of a page within a list, for "Showing X to Y of Z"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based index of the first row on the page, 0 when the page is empty
    pub first_item: usize,
    /// 1-based index of the last row on the page, 0 when the page is empty
    pub last_item: usize,
}

impl PageInfo {
    pub fn new(total_items: usize, page: NonZeroUsize, page_size: NonZeroUsize) -> Self {
        let bounds = page_bounds(total_items, page, page_size);
        let (first_item, last_item) = if bounds.is_empty() {
            (0, 0)
        } else {
            (bounds.start + 1, bounds.end)
        };

        Self {
            page: page.get(),
            page_size: page_size.get(),
            total_items,
            total_pages: total_pages(total_items, page_size),
            first_item,
            last_item,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.first_item == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, nz(25)), 0);
        assert_eq!(total_pages(25, nz(25)), 1);
        assert_eq!(total_pages(26, nz(25)), 2);
    }

    #[test]
    fn test_bounds_clip_last_page() {
        assert_eq!(page_bounds(30, nz(2), nz(25)), 25..30);
        assert_eq!(page_bounds(30, nz(3), nz(25)), 30..30);
    }

    #[test]
    fn test_bounds_huge_page_does_not_overflow() {
        assert_eq!(page_bounds(10, nz(usize::MAX), nz(usize::MAX)), 10..10);
    }

    #[test]
    fn test_page_info_range() {
        let info = PageInfo::new(30, nz(2), nz(25));
        assert_eq!((info.first_item, info.last_item), (26, 30));
        assert!(info.has_previous());
        assert!(!info.has_next());

        let empty = PageInfo::new(0, nz(1), nz(25));
        assert!(empty.is_empty());
        assert_eq!(empty.total_pages, 0);
    }
}
