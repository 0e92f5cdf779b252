//! Page window over the sorted list.

use serde::Serialize;

/// Allowed rows-per-page values.
pub const ROWS_PER_PAGE_OPTIONS: &[usize] = &[5, 10];

/// Default rows per page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Zero-based page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Number of pages for `len` rows. An empty list still has one (empty) page.
    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.rows_per_page)
    }

    /// Copy with the page clamped to the last valid page for `len` rows.
    pub fn clamped(&self, len: usize) -> Pagination {
        Pagination {
            page: clamp_page(self.page, len, self.rows_per_page),
            rows_per_page: self.rows_per_page,
        }
    }

    /// Index range of the rows on the current page, truncated to `len`.
    pub fn window(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.page.saturating_mul(self.rows_per_page).min(len);
        let end = start.saturating_add(self.rows_per_page).min(len);
        start..end
    }
}

/// Number of pages needed for `len` rows, at least one.
pub fn page_count(len: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        return 1;
    }
    len.div_ceil(rows_per_page).max(1)
}

/// Clamps `page` to `0..page_count(len, rows_per_page)`.
pub fn clamp_page(page: usize, len: usize, rows_per_page: usize) -> usize {
    page.min(page_count(len, rows_per_page) - 1)
}

/// Returns `list[page*rows_per_page .. (page+1)*rows_per_page]`, truncated to
/// the list. A page past the end yields an empty slice.
pub fn paginate<T>(list: &[T], page: usize, rows_per_page: usize) -> &[T] {
    let window = Pagination {
        page,
        rows_per_page,
    }
    .window(list.len());
    &list[window]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_windows() {
        let list: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&list, 0, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(paginate(&list, 1, 5), &[6, 7, 8, 9, 10]);
        assert_eq!(paginate(&list, 2, 5), &[11, 12]);
        assert!(paginate(&list, 3, 5).is_empty());
        assert!(paginate(&list, usize::MAX, 10).is_empty());
        assert_eq!(paginate(&list, 0, 10).len(), 10);
    }

    #[test]
    fn paginate_empty_list() {
        let list: Vec<u32> = Vec::new();
        assert!(paginate(&list, 0, 5).is_empty());
    }

    #[test]
    fn page_count_rounds_up_with_minimum_one() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(100, 10), 10);
        assert_eq!(page_count(3, 0), 1);
    }

    #[test]
    fn clamp_to_last_page() {
        assert_eq!(clamp_page(7, 12, 5), 2);
        assert_eq!(clamp_page(1, 12, 5), 1);
        assert_eq!(clamp_page(4, 0, 5), 0);

        let p = Pagination {
            page: 9,
            rows_per_page: 10,
        };
        assert_eq!(p.clamped(25).page, 2);
    }
}
