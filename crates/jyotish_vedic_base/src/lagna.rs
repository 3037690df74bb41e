//! Lagna (Ascendant) computation.
//!
//! Standard spherical-astronomy formula for the ecliptic longitude rising
//! on the eastern horizon, fed by mean sidereal time and mean obliquity:
//!
//! `Asc = atan2(sin(LST), cos(LST)·cos(ε) − tan(φ)·sin(ε))`
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13.

use jyotish_time::{gmst_deg, local_sidereal_time_deg, mean_obliquity_deg};

use crate::ayanamsha::tropical_to_sidereal;
use crate::error::VedicError;
use crate::location::GeoLocation;

/// Tropical ascendant from LST, latitude and obliquity (all degrees), [0, 360).
///
/// Diverges as latitude approaches ±90 deg.
pub fn ascendant_from_lst_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let y = lst.sin();
    let x = lst.cos() * eps.cos() - phi.tan() * eps.sin();
    let asc = y.atan2(x).to_degrees();
    if asc < 0.0 { asc + 360.0 } else { asc }
}

/// Sidereal longitude of the Lagna in degrees, [0, 360).
///
/// # Errors
/// [`VedicError::PolarLatitude`] for |latitude| >= 90 deg (the horizon
/// coincides with the equator and the rising point is undefined), and
/// [`VedicError::NonFinite`] if the formula still produces NaN/infinity.
pub fn lagna_longitude_deg(jd: f64, location: &GeoLocation) -> Result<f64, VedicError> {
    let lat = location.latitude_deg;
    if !(lat.abs() < 90.0) {
        return Err(VedicError::PolarLatitude(lat));
    }
    let lst = local_sidereal_time_deg(gmst_deg(jd), location.longitude_deg);
    let tropical = ascendant_from_lst_deg(lst, lat, mean_obliquity_deg(jd));
    let sidereal = tropical_to_sidereal(tropical, jd);
    if sidereal.is_finite() {
        Ok(sidereal)
    } else {
        Err(VedicError::NonFinite("lagna longitude"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS_J2000: f64 = 23.439_291;

    /// LST=0 at the equator: y = 0, x = cos(eps) > 0, so Asc = 0 deg.
    #[test]
    fn equator_lst_zero() {
        let asc = ascendant_from_lst_deg(0.0, 0.0, EPS_J2000);
        assert!(asc.abs() < 1e-10, "asc = {asc}");
    }

    /// LST=90 at the equator: y = 1, x = 0, so Asc = 90 deg.
    #[test]
    fn equator_lst_ninety() {
        let asc = ascendant_from_lst_deg(90.0, 0.0, EPS_J2000);
        assert!((asc - 90.0).abs() < 1e-10, "asc = {asc}");
    }

    #[test]
    fn quadrant_sweep_covers_circle() {
        let mut min_asc = f64::MAX;
        let mut max_asc = f64::MIN;
        for i in 0..360 {
            let asc = ascendant_from_lst_deg(f64::from(i), 28.6, EPS_J2000);
            assert!((0.0..360.0).contains(&asc));
            min_asc = min_asc.min(asc);
            max_asc = max_asc.max(asc);
        }
        assert!(min_asc < 3.0, "min_asc = {min_asc}");
        assert!(max_asc > 357.0, "max_asc = {max_asc}");
    }

    #[test]
    fn pole_is_rejected() {
        let north = GeoLocation::new(90.0, 0.0);
        let south = GeoLocation::new(-90.0, 10.0);
        assert_eq!(
            lagna_longitude_deg(2_451_545.0, &north),
            Err(VedicError::PolarLatitude(90.0))
        );
        assert!(matches!(
            lagna_longitude_deg(2_451_545.0, &south),
            Err(VedicError::PolarLatitude(_))
        ));
    }

    #[test]
    fn nan_latitude_is_rejected() {
        let loc = GeoLocation::new(f64::NAN, 0.0);
        assert!(lagna_longitude_deg(2_451_545.0, &loc).is_err());
    }

    #[test]
    fn sidereal_output_in_range() {
        let loc = GeoLocation::new(28.6139, 77.209);
        for k in 0..48 {
            let jd = 2_449_913.5 + f64::from(k) / 48.0;
            let l = lagna_longitude_deg(jd, &loc).unwrap();
            assert!((0.0..360.0).contains(&l), "lagna = {l}");
        }
    }
}
