//! Utility modules for usertable.

mod date_parser;
mod natural;

pub use date_parser::{DateParseError, parse_date, parse_date_with_base};
pub use natural::natural_cmp;
