//! Boundary facade over the jyotish calculation crates.
//!
//! Accepts the plain strings and numbers a request handler has at hand,
//! validates them, and returns serializable records. Every failure is one
//! of two kinds, [`JyotishError::Validation`] or
//! [`JyotishError::Computation`].
//!
//! # Quick start
//!
//! ```rust
//! use jyotish_rs::*;
//!
//! let chart = compute_kundali("1995-07-15", "10:30", 28.6139, 77.2090, None).unwrap();
//! let moon = chart.moon.point.longitude;
//! let report = compute_compatibility(moon, 100.0).unwrap();
//! println!("{} / 36: {}", report.total_score, report.verdict);
//! ```
//!
//! Results are pure functions of their inputs apart from
//! [`daily_horoscope`] with no date, which reads the clock.

pub mod convenience;
pub mod error;

pub use convenience::{
    DEFAULT_TZ_OFFSET_HOURS, compute_compatibility, compute_dasha, compute_kundali,
    compute_numerology, daily_horoscope, nakshatra, nakshatra_table, rashi, rashi_table,
};
pub use error::JyotishError;

// Result and reference types so callers need no direct dependency on the core crates.
pub use jyotish_time::{BirthMoment, jd_to_calendar, julian_day};
pub use jyotish_vedic_base::{
    Bhava, BirthDetails, ChartPoint, CompatibilityResult, DailyHoroscope, DashaPeriod, Dms,
    Element, ErrorKind, Gana, GeoLocation, Graha, Koota, KootaScore, Kundali, MoonPoint, Nadi,
    Nakshatra, NakshatraInfo, NumberReading, NumerologyResult, PersonProfile, Rashi, RashiInfo,
    VimshottariDasha,
};
