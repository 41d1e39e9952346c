//! Conversion of caller dates into the timestamp format GNews expects.

use chrono::{Datelike, NaiveDate};

use crate::error::GNewsError;

/// Format accepted from callers
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Format sent to the API for `from`/`to`
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Converts `YYYY-MM-DD` into `YYYY-MM-DDT00:00:00.000Z` (midnight UTC).
///
/// Only the exact shape is accepted: four-digit year, two-digit month and day,
/// hyphen separators, nothing before or after.
///
/// # Errors
///
/// Returns [`GNewsError::InvalidDate`] carrying the original input otherwise.
pub fn to_api_timestamp(input: &str) -> Result<String, GNewsError> {
    parse_strict(input)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().format(API_TIMESTAMP_FORMAT).to_string())
        .ok_or_else(|| GNewsError::InvalidDate(input.to_string()))
}

/// Converts an optional date, treating `None` and `""` as absent
///
/// # Errors
///
/// Same as [`to_api_timestamp`].
pub fn optional_api_timestamp(input: Option<&str>) -> Result<Option<String>, GNewsError> {
    match input {
        Some(s) if !s.is_empty() => to_api_timestamp(s).map(Some),
        _ => Ok(None),
    }
}

fn parse_strict(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }

    // chrono's %Y alone would accept year 0
    NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT)
        .ok()
        .filter(|d| d.year() >= 1)
}
