//! Immutable view state and its transitions.
//!
//! Every transition returns a new [`ViewState`]. Filter changes reset the sort
//! to `(id, asc)` and return to the first page.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Status;

use super::ViewError;
use super::filter::{DateRange, FilterState};
use super::page::{Pagination, ROWS_PER_PAGE_OPTIONS, clamp_page, page_count};
use super::sort::{SortField, SortState, toggle_sort};

/// Filter, sort and pagination settings driving the displayed subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub filter: FilterState,
    pub sort: SortState,
    pub pagination: Pagination,
}

impl ViewState {
    /// Replaces the filter. A change resets sort and page; setting the same
    /// filter again leaves the state untouched.
    pub fn with_filter(&self, filter: FilterState) -> Self {
        if filter == self.filter {
            return self.clone();
        }
        Self {
            filter,
            sort: SortState::default(),
            pagination: Pagination {
                page: 0,
                ..self.pagination
            },
        }
    }

    pub fn with_status_filter(&self, status: Option<Status>) -> Self {
        self.with_filter(FilterState {
            status,
            ..self.filter.clone()
        })
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        self.with_filter(FilterState {
            search: search.into(),
            ..self.filter.clone()
        })
    }

    pub fn with_date_range(&self, date_range: DateRange) -> Self {
        self.with_filter(FilterState {
            date_range,
            ..self.filter.clone()
        })
    }

    pub fn with_start_date(&self, start: Option<NaiveDate>) -> Self {
        self.with_date_range(DateRange {
            start,
            ..self.filter.date_range
        })
    }

    pub fn with_end_date(&self, end: Option<NaiveDate>) -> Self {
        self.with_date_range(DateRange {
            end,
            ..self.filter.date_range
        })
    }

    pub fn cleared_filters(&self) -> Self {
        self.with_filter(FilterState::default())
    }

    /// Requests a sort on `field` (header click).
    pub fn with_sort_toggled(&self, field: SortField) -> Self {
        self.with_sort(toggle_sort(self.sort, field))
    }

    pub fn with_sort(&self, sort: SortState) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            pagination: Pagination {
                page,
                ..self.pagination
            },
            ..self.clone()
        }
    }

    /// Moves forward one page, staying on the last page of `filtered_len` rows.
    pub fn next_page(&self, filtered_len: usize) -> Self {
        let rpp = self.pagination.rows_per_page;
        let page = clamp_page(self.pagination.page.saturating_add(1), filtered_len, rpp);
        self.with_page(page)
    }

    pub fn prev_page(&self) -> Self {
        self.with_page(self.pagination.page.saturating_sub(1))
    }

    pub fn last_page(&self, filtered_len: usize) -> Self {
        self.with_page(page_count(filtered_len, self.pagination.rows_per_page) - 1)
    }

    /// Changes the page size. Only values in [`ROWS_PER_PAGE_OPTIONS`] are
    /// accepted; the page returns to 0.
    pub fn with_rows_per_page(&self, rows_per_page: usize) -> Result<Self, ViewError> {
        if !ROWS_PER_PAGE_OPTIONS.contains(&rows_per_page) {
            return Err(ViewError::InvalidRowsPerPage(rows_per_page));
        }
        Ok(Self {
            pagination: Pagination {
                page: 0,
                rows_per_page,
            },
            ..self.clone()
        })
    }

    /// Switches to the next rows-per-page option, wrapping around.
    pub fn with_next_rows_per_page(&self) -> Self {
        let current = ROWS_PER_PAGE_OPTIONS
            .iter()
            .position(|&n| n == self.pagination.rows_per_page)
            .unwrap_or(0);
        let next = ROWS_PER_PAGE_OPTIONS[(current + 1) % ROWS_PER_PAGE_OPTIONS.len()];
        Self {
            pagination: Pagination {
                page: 0,
                rows_per_page: next,
            },
            ..self.clone()
        }
    }
}
