//! Calendar and time-scale helpers for the approximate Vedic chart pipeline.
//!
//! This crate provides:
//! - Gregorian calendar ↔ Julian Day conversion
//! - Greenwich/local mean sidereal time and mean obliquity (low-order models)
//! - `BirthMoment`, a validated local civil date/time plus UTC offset
//!
//! Everything here is a pure function of its inputs. There is no leap-second
//! or time-zone database: callers supply a numeric UTC offset.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{BirthMoment, MAX_UTC_OFFSET_HOURS, parse_date, parse_time};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J2000_JD, jd_to_calendar, julian_centuries,
    julian_day,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg, mean_obliquity_deg};
