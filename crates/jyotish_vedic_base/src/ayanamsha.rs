//! Lahiri ayanamsha as a linear precession model.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward, the ayanamsha increases over time.
//!
//! This crate uses a single straight-line model anchored at J2000.0:
//! `ayanamsha(JD) = 23.856 + (50.29 / 3600) * years_since_J2000`.
//! It is a few arc-minutes away from the IAU-precession Lahiri value over
//! the 20th/21st centuries, which is below the resolution of sign and
//! pada classification for most charts.

use jyotish_time::{DAYS_PER_JULIAN_YEAR, J2000_JD};

/// Lahiri ayanamsha at J2000.0 in degrees.
pub const AYANAMSHA_J2000_DEG: f64 = 23.856;

/// Precession rate in arc-seconds per Julian year.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.29;

/// Ayanamsha in degrees for a Julian Day.
pub fn ayanamsha_deg(jd: f64) -> f64 {
    let years = (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR;
    AYANAMSHA_J2000_DEG + PRECESSION_ARCSEC_PER_YEAR / 3600.0 * years
}

/// Convert a tropical longitude to sidereal, normalized to [0, 360).
pub fn tropical_to_sidereal(tropical_deg: f64, jd: f64) -> f64 {
    crate::util::normalize_360(tropical_deg - ayanamsha_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_at_j2000() {
        assert!((ayanamsha_deg(J2000_JD) - AYANAMSHA_J2000_DEG).abs() < 1e-15);
    }

    #[test]
    fn one_century_drift() {
        let diff = ayanamsha_deg(J2000_JD + 36_525.0) - ayanamsha_deg(J2000_JD);
        // 50.29"/yr * 100 yr = 1.3969 deg
        assert!((diff - 1.396_944).abs() < 1e-5, "drift = {diff}");
    }

    #[test]
    fn backward_in_time_decreases() {
        assert!(ayanamsha_deg(J2000_JD - 3652.5) < AYANAMSHA_J2000_DEG);
    }

    #[test]
    fn sidereal_wraps() {
        // 10 deg tropical at J2000 → 10 - 23.856 + 360 = 346.144
        let s = tropical_to_sidereal(10.0, J2000_JD);
        assert!((s - 346.144).abs() < 1e-9, "s = {s}");
    }
}
