//! Birth chart (Kundali) assembly.
//!
//! Orchestrates the time conversion, the three position estimators and the
//! classifiers into a single immutable chart record. The chart either
//! builds completely or the call fails; nothing is returned half-populated.

use serde::Serialize;

use jyotish_time::BirthMoment;

use crate::ayanamsha::ayanamsha_deg;
use crate::bhava::{Bhava, bhavas_from_lagna};
use crate::error::VedicError;
use crate::lagna::lagna_longitude_deg;
use crate::location::GeoLocation;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::position::{moon_longitude_deg, sun_longitude_deg};
use crate::rashi::{RashiInfo, rashi_from_longitude};
use crate::util::round_to;

/// Birth data echoed back in the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthDetails {
    pub moment: BirthMoment,
    pub location: GeoLocation,
    /// Offset label, e.g. `UTC+5.5`.
    pub timezone: String,
}

/// A sidereal point classified into its rashi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    /// `longitude` rounded to 2 decimals.
    pub degree: f64,
    pub rashi: RashiInfo,
}

impl ChartPoint {
    fn at(longitude: f64) -> Self {
        Self {
            longitude,
            degree: round_to(longitude, 2),
            rashi: rashi_from_longitude(longitude),
        }
    }
}

/// The Moon additionally carries its nakshatra and pada.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPoint {
    #[serde(flatten)]
    pub point: ChartPoint,
    pub nakshatra: NakshatraInfo,
}

/// Complete birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kundali {
    pub birth_details: BirthDetails,
    /// Julian Day (UT) of the birth moment.
    pub julian_day: f64,
    pub lagna: ChartPoint,
    pub sun: ChartPoint,
    pub moon: MoonPoint,
    /// Houses 1-12 from the Lagna.
    pub houses: [Bhava; 12],
    /// Ayanamsha used for every sidereal conversion, rounded to 4 decimals.
    pub ayanamsha: f64,
}

/// Compute the chart for a birth moment and place.
///
/// The local time is shifted to UTC by the moment's offset without
/// touching the calendar date (see [`BirthMoment::julian_day`]).
///
/// # Errors
/// Only the Lagna can fail: [`VedicError::PolarLatitude`] at the poles or
/// [`VedicError::NonFinite`] on a degenerate result.
pub fn calculate_kundali(
    moment: &BirthMoment,
    location: &GeoLocation,
) -> Result<Kundali, VedicError> {
    let jd = moment.julian_day();

    let lagna_deg = lagna_longitude_deg(jd, location)?;
    let sun_deg = sun_longitude_deg(jd);
    let moon_deg = moon_longitude_deg(jd);

    Ok(Kundali {
        birth_details: BirthDetails {
            moment: *moment,
            location: *location,
            timezone: moment.utc_offset_label(),
        },
        julian_day: jd,
        lagna: ChartPoint::at(lagna_deg),
        sun: ChartPoint::at(sun_deg),
        moon: MoonPoint {
            point: ChartPoint::at(moon_deg),
            nakshatra: nakshatra_from_longitude(moon_deg),
        },
        houses: bhavas_from_lagna(lagna_deg),
        ayanamsha: round_to(ayanamsha_deg(jd), 4),
    })
}
