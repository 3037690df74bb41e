//! Local civil birth date/time with a numeric UTC offset.
//!
//! Provides `BirthMoment`, the canonical input of the chart pipeline.
//! Conversion to a Julian Day subtracts the offset from the decimal hour
//! and leaves the calendar date untouched; see [`BirthMoment::julian_day`].

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::julian_day;

/// Largest UTC offset magnitude accepted, in hours (UTC-12 .. UTC+14 in use).
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Parse a `YYYY-MM-DD` Gregorian date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` or `HH:MM:SS` time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let t = s.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(s.to_string()))
}

/// Local civil date and time of birth plus the zone's offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthMoment {
    /// Local calendar date.
    pub date: NaiveDate,
    /// Local wall-clock time.
    pub time: NaiveTime,
    /// Hours east of UTC (IST = 5.5).
    pub utc_offset_hours: f64,
}

impl BirthMoment {
    /// Create a birth moment, rejecting non-finite or out-of-range offsets.
    pub fn new(date: NaiveDate, time: NaiveTime, utc_offset_hours: f64) -> Result<Self, TimeError> {
        if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
            return Err(TimeError::InvalidUtcOffset(utc_offset_hours));
        }
        Ok(Self {
            date,
            time,
            utc_offset_hours,
        })
    }

    /// Parse date (`YYYY-MM-DD`) and time (`HH:MM[:SS]`) strings.
    pub fn parse(date: &str, time: &str, utc_offset_hours: f64) -> Result<Self, TimeError> {
        Self::new(parse_date(date)?, parse_time(time)?, utc_offset_hours)
    }

    /// Decimal UTC hour on the local calendar date.
    ///
    /// May be negative or >= 24; no calendar rollover is applied.
    pub fn utc_hours(&self) -> f64 {
        f64::from(self.time.hour())
            + f64::from(self.time.minute()) / 60.0
            + f64::from(self.time.second()) / 3600.0
            - self.utc_offset_hours
    }

    /// Julian Day of the moment.
    ///
    /// The local Y-M-D is passed through unchanged together with
    /// [`utc_hours`](Self::utc_hours); day-boundary crossings are absorbed by
    /// the fractional-day term of [`julian_day`].
    pub fn julian_day(&self) -> f64 {
        julian_day(
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.utc_hours(),
        )
    }

    /// Offset label such as `UTC+5.5`, `UTC+5.0` or `UTC-3.5`.
    pub fn utc_offset_label(&self) -> String {
        let sign = if self.utc_offset_hours >= 0.0 { "+" } else { "" };
        format!("UTC{sign}{:?}", self.utc_offset_hours)
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M:%S"),
            self.utc_offset_label()
        )
    }
}
