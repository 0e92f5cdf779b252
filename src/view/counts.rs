//! Status aggregation over the full record set.

use serde::Serialize;

use crate::model::{Record, Status};

/// Per-status totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub active: usize,
    /// Everything that is not active: `total - active`.
    pub inactive: usize,
    pub invited: usize,
    pub blocked: usize,
}

impl StatusCounts {
    /// Share of inactive records in percent; `0.0` for an empty set.
    pub fn inactive_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.inactive as f64 / self.total as f64 * 100.0
    }
}

pub fn derive_counts(records: &[Record]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: records.len(),
        ..StatusCounts::default()
    };
    for r in records {
        match r.about.status {
            Status::Active => counts.active += 1,
            Status::Invited => counts.invited += 1,
            Status::Blocked => counts.blocked += 1,
        }
    }
    counts.inactive = counts.total - counts.active;
    counts
}
