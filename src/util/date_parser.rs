//! Flexible date parser for date range bounds.
//!
//! Supports multiple formats:
//! - Calendar date: `2024-05-17`
//! - ISO 8601 datetime: `2024-05-17T09:30:00`, `2024-05-17T09:30:00Z` (date part is kept)
//! - Keyword: `today`
//! - Relative: `-30d`, `-2w`, `-6m` (months), `-1y`

use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime, Utc};

/// Error type for date parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub input: String,
    pub message: String,
}

impl std::fmt::Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse date '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for DateParseError {}

/// Parse a date bound relative to the current UTC day.
///
/// # Examples
///
/// ```
/// use usertable::util::parse_date;
///
/// let d = parse_date("2024-05-17").unwrap();
/// assert_eq!(d.to_string(), "2024-05-17");
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    parse_date_with_base(input, Utc::now().date_naive())
}

/// Parses a date expression using `today` as the reference for `today` and
/// relative forms.
///
/// | Format | Example | Description |
/// |--------|---------|-------------|
/// | Date | `2024-05-17` | Calendar date |
/// | ISO 8601 | `2024-05-17T09:30:00` | Date part of a datetime |
/// | Keyword | `today` | The `today` argument |
/// | Relative | `-30d`, `-2w`, `-6m`, `-1y` | Days, weeks, months, years before `today` |
pub fn parse_date_with_base(input: &str, today: NaiveDate) -> Result<NaiveDate, DateParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(DateParseError {
            input: input.to_string(),
            message: "Empty input".to_string(),
        });
    }

    if input.eq_ignore_ascii_case("today") {
        return Ok(today);
    }

    if let Some(date) = try_parse_relative(input, today) {
        return Ok(date);
    }

    if let Some(date) = try_parse_calendar_date(input) {
        return Ok(date);
    }

    if let Some(date) = try_parse_iso8601(input) {
        return Ok(date);
    }

    Err(DateParseError {
        input: input.to_string(),
        message: "Unrecognized format. Use: date (2024-05-17), \
                  ISO 8601 (2024-05-17T09:30:00), today, \
                  or relative (-30d, -2w, -6m, -1y)"
            .to_string(),
    })
}

/// Try to parse as relative date (-30d, -2w, -6m, -1y).
fn try_parse_relative(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let rest = input.strip_prefix('-')?;
    let unit = rest.chars().last()?;
    let number_str = &rest[..rest.len() - unit.len_utf8()];
    if number_str.is_empty() {
        return None;
    }
    let number: u32 = number_str.parse().ok()?;

    match unit {
        'd' => today.checked_sub_days(Days::new(number as u64)),
        'w' => today.checked_sub_days(Days::new(number as u64 * 7)),
        'm' => today.checked_sub_months(Months::new(number)),
        'y' => today.checked_sub_months(Months::new(number.checked_mul(12)?)),
        _ => None,
    }
}

fn try_parse_calendar_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Try to parse as ISO 8601 datetime and keep the (UTC) date part.
fn try_parse_iso8601(input: &str) -> Option<NaiveDate> {
    if !input.contains('T') {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    // No timezone, assume UTC
    if let Ok(ndt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(ndt.date());
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|ndt| ndt.date())
}
