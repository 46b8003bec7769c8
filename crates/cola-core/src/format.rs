//! Date display helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{ColaError, ColaResult};

/// Render a date as en-US long form, e.g. `March 15, 2024`.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and RFC 3339 timestamps. The
/// calendar date is taken as written; no timezone conversion happens.
pub fn format_long_date(input: &str) -> ColaResult<String> {
    let date = parse_date(input.trim())
        .ok_or_else(|| ColaError::InvalidDate(input.to_string()))?;
    Ok(date.format("%B %-d, %Y").to_string())
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
