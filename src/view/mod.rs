//! Table view model.
//!
//! The pipeline is: records → [`filter::apply_filters`] → [`sort::sort_records`]
//! → [`page::paginate`]. [`derive_view`] runs it for one [`ViewState`]; nothing
//! is cached, every change of state derives the view again.
//!
//! [`users::build_users_view`] turns the derived page into a UI-agnostic
//! [`common::TableViewModel`] that the TUI renders.

pub mod common;
pub mod counts;
pub mod edit;
pub mod filter;
pub mod page;
pub mod sort;
pub mod state;
pub mod users;

use serde::Serialize;
use tracing::trace;

use crate::model::Record;

pub use counts::{StatusCounts, derive_counts};
pub use edit::update_status;
pub use filter::{DateRange, FilterState, apply_filters};
pub use page::{Pagination, ROWS_PER_PAGE_OPTIONS, paginate};
pub use sort::{ParseSortFieldError, SortDirection, SortField, SortState, sort_records, toggle_sort};
pub use state::ViewState;

/// Errors raised by view operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// No record with this id exists.
    RecordNotFound(u32),
    /// Rows per page is not one of [`ROWS_PER_PAGE_OPTIONS`].
    InvalidRowsPerPage(usize),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::RecordNotFound(id) => write!(f, "no record with id {}", id),
            ViewError::InvalidRowsPerPage(n) => write!(
                f,
                "invalid rows per page {} (expected one of {:?})",
                n, ROWS_PER_PAGE_OPTIONS
            ),
        }
    }
}

impl std::error::Error for ViewError {}

/// Result of running the pipeline for one view state.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedView<'a> {
    /// Rows on the current page, in display order.
    pub rows: Vec<&'a Record>,
    /// Number of records passing the filter.
    pub filtered_len: usize,
    /// Pagination with the page clamped to the last valid page.
    pub pagination: Pagination,
    pub page_count: usize,
    /// Counts over the full record set, not the filtered one.
    pub counts: StatusCounts,
}

impl DerivedView<'_> {
    /// Index range of the current page within the filtered list.
    pub fn window(&self) -> std::ops::Range<usize> {
        self.pagination.window(self.filtered_len)
    }
}

/// Filters, sorts and paginates `records` for `state`.
pub fn derive_view<'a>(records: &'a [Record], state: &ViewState) -> DerivedView<'a> {
    let filtered = apply_filters(records, &state.filter);
    let sorted = sort_records(&filtered, state.sort);
    let pagination = state.pagination.clamped(sorted.len());
    let rows = paginate(&sorted, pagination.page, pagination.rows_per_page).to_vec();

    trace!(
        filtered = sorted.len(),
        page = pagination.page,
        rows = rows.len(),
        "view derived"
    );

    DerivedView {
        rows,
        filtered_len: sorted.len(),
        page_count: pagination.page_count(sorted.len()),
        pagination,
        counts: derive_counts(records),
    }
}
