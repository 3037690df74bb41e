//! Error types for calendar input handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating civil date/time input.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not a valid `YYYY-MM-DD` Gregorian date.
    InvalidDate(String),
    /// Time string is not a valid `HH:MM` or `HH:MM:SS` time of day.
    InvalidTime(String),
    /// UTC offset is non-finite or outside [-14, +14] hours.
    InvalidUtcOffset(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date '{s}', expected YYYY-MM-DD"),
            Self::InvalidTime(s) => write!(f, "invalid time '{s}', expected HH:MM or HH:MM:SS"),
            Self::InvalidUtcOffset(h) => {
                write!(f, "invalid UTC offset {h} h, expected a value in [-14, 14]")
            }
        }
    }
}

impl Error for TimeError {}
