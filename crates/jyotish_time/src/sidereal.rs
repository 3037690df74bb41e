//! Mean sidereal time and mean obliquity of the ecliptic.
//!
//! Low-order models referenced to J2000.0, adequate for sign-level chart
//! work. All angles are in degrees.
//!
//! Sources:
//! - GMST: Meeus, Astronomical Algorithms, eq. 12.4 (truncated after T²).
//! - Obliquity: linear term of the IAU 1980 mean obliquity series.

use crate::julian::{J2000_JD, julian_centuries};

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// `GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T²`
/// where `d` is days and `T` Julian centuries since J2000.0.
pub fn gmst_deg(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = julian_centuries(jd);
    (280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t).rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude, [0, 360).
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

/// Mean obliquity of the ecliptic in degrees: `23.439291 - 0.0130042·T`.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    23.439_291 - 0.013_004_2 * julian_centuries(jd)
}
