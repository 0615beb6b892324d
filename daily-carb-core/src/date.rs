//! Date key helpers.
//!
//! Day records are keyed by zero-padded ISO dates (`YYYY-MM-DD`), which is
//! what makes plain string ordering of keys chronological.

use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date format '{0}'. Use YYYY-MM-DD.")]
    InvalidFormat(String),
}

/// Formats a date as a `YYYY-MM-DD` key.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's key in the local timezone.
pub fn today_date() -> String {
    format_date(Local::now().date_naive())
}

/// Parses a `YYYY-MM-DD` key.
pub fn parse_date(date: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| DateError::InvalidFormat(date.to_string()))
}

/// Parses and re-formats a date so keys are always zero-padded.
pub fn normalize_date(date: &str) -> Result<String, DateError> {
    parse_date(date).map(format_date)
}

/// True if `date` is strictly before today (local calendar date).
///
/// Unparseable input is never in the past.
pub fn is_date_in_past(date: &str) -> bool {
    is_date_before(date, Local::now().date_naive())
}

/// True if `date` is strictly before `reference`.
pub fn is_date_before(date: &str, reference: NaiveDate) -> bool {
    parse_date(date).is_ok_and(|d| d < reference)
}
