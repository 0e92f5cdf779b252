//! usertable - interactive user table with filtering, sorting and paging.
//!
//! The library provides:
//! - `model` - user records and statuses
//! - `mock` - seeded mock record generation
//! - `view` - the pure view model (filter, sort, paginate, counts, status edits)
//! - `util` - natural-order comparison and date parsing
//! - `tui` - interactive terminal UI over the view model

pub mod mock;
pub mod model;
pub mod tui;
pub mod util;
pub mod view;
