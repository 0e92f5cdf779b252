//! Record filtering: status, name search and date range.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Record, Status};

/// Inclusive calendar date range. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True if `date` lies within the range, both bounds included.
    /// A range with `start > end` contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Active filter criteria. Absent criteria pass every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub status: Option<Status>,
    /// Case-insensitive substring matched against the name. Empty means no search.
    pub search: String,
    pub date_range: DateRange,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.search.is_empty() && self.date_range.is_unbounded()
    }

    /// Checks if a record satisfies every active criterion.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_status(record) && self.matches_search(record) && self.matches_date(record)
    }

    fn matches_status(&self, record: &Record) -> bool {
        self.status.is_none_or(|s| record.about.status == s)
    }

    fn matches_search(&self, record: &Record) -> bool {
        if self.search.is_empty() {
            return true;
        }
        record
            .about
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    fn matches_date(&self, record: &Record) -> bool {
        self.date_range.contains(record.details.date.date_naive())
    }
}

/// Returns the records that satisfy `filter`, in input order.
pub fn apply_filters<'a>(records: &'a [Record], filter: &FilterState) -> Vec<&'a Record> {
    records.iter().filter(|r| filter.matches(r)).collect()
}
