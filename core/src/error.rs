use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VifError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("Weekday ordinal out of range for '{token}': {ordinal} (expected 0..=6)")]
    InvalidOrdinal { token: String, ordinal: u8 },
    #[error("Empty token in weekday lexicon")]
    EmptyToken,
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Todo with ID {0} not found")]
    TodoNotFound(String),
}
