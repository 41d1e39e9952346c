//! Small predicates shared by the search and headlines requests.

use std::str::FromStr;

use crate::error::GNewsError;

/// Drops `""` so empty optionals behave like absent ones
#[must_use]
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// True for exactly two ASCII letters
#[must_use]
pub fn is_two_letter_code(s: &str) -> bool {
    s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Validates and lowercases a language code
///
/// # Errors
///
/// Returns a validation error on `language` unless the code is two letters.
pub fn language_code(raw: &str) -> Result<String, GNewsError> {
    if is_two_letter_code(raw) {
        Ok(raw.to_ascii_lowercase())
    } else {
        Err(GNewsError::validation(
            "language",
            "'language' must be a 2-letter language code",
        ))
    }
}

/// Validates and lowercases an optional country code; `""` counts as absent
///
/// # Errors
///
/// Returns a validation error on `country` unless the code is two letters.
pub fn country_code(raw: Option<&str>) -> Result<Option<String>, GNewsError> {
    match present(raw) {
        Some(c) if is_two_letter_code(c) => Ok(Some(c.to_ascii_lowercase())),
        Some(_) => Err(GNewsError::validation(
            "country",
            "'country' must be a 2-letter country code",
        )),
        None => Ok(None),
    }
}

/// Trims a required query, rejecting blank input
///
/// # Errors
///
/// Returns a validation error on `query` when nothing is left after trimming.
pub fn required_query(raw: &str) -> Result<String, GNewsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(GNewsError::validation(
            "query",
            "Search query 'query' is required and cannot be empty",
        ))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trims an optional query; blank input counts as absent
#[must_use]
pub fn optional_query(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
}

/// Parses `raw` into one of a fixed set of values, falling back to `default` only when absent
///
/// # Errors
///
/// Propagates the `FromStr` error, which names the field.
pub fn one_of<T>(raw: Option<&str>, default: T) -> Result<T, GNewsError>
where
    T: FromStr<Err = GNewsError>,
{
    raw.map_or(Ok(default), T::from_str)
}
