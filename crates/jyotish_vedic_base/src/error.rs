//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_time::TimeError;

/// Which side of the boundary an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller supplied malformed or out-of-range input.
    Validation,
    /// A formula hit a numeric degeneracy for otherwise valid input.
    Computation,
}

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from calendar/time input handling.
    Time(TimeError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Rashi index outside 0..=11.
    InvalidRashiIndex(i64),
    /// Latitude at (or beyond) a pole, where `tan(latitude)` diverges.
    PolarLatitude(f64),
    /// A formula produced NaN or infinity.
    NonFinite(&'static str),
}

impl VedicError {
    /// Classify the error as a validation or computation failure.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Time(_) | Self::InvalidLocation(_) | Self::InvalidRashiIndex(_) => {
                ErrorKind::Validation
            }
            Self::PolarLatitude(_) | Self::NonFinite(_) => ErrorKind::Computation,
        }
    }
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidRashiIndex(i) => write!(f, "invalid rashi index {i}, expected 0-11"),
            Self::PolarLatitude(lat) => {
                write!(f, "ascendant undefined at latitude {lat} deg (pole)")
            }
            Self::NonFinite(what) => write!(f, "non-finite result: {what}"),
        }
    }
}

impl Error for VedicError {}

impl From<TimeError> for VedicError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            VedicError::InvalidRashiIndex(12).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            VedicError::Time(TimeError::InvalidDate("x".into())).kind(),
            ErrorKind::Validation
        );
        assert_eq!(VedicError::PolarLatitude(90.0).kind(), ErrorKind::Computation);
        assert_eq!(VedicError::NonFinite("lagna").kind(), ErrorKind::Computation);
    }

    #[test]
    fn display_mentions_value() {
        let msg = VedicError::InvalidRashiIndex(14).to_string();
        assert!(msg.contains("14"), "{msg}");
    }
}
