//! Closed-form Sun and Moon longitudes.
//!
//! Low-order series, good to roughly 0.01 deg (Sun) and 1-2 deg (Moon).
//! Both return sidereal longitudes: tropical value minus
//! [`ayanamsha_deg`](crate::ayanamsha::ayanamsha_deg), normalized to [0, 360).
//!
//! Sources: Astronomical Almanac low-precision solar formula; leading
//! equation-of-centre term of the lunar theory (Meeus ch. 47).

use jyotish_time::J2000_JD;

use crate::ayanamsha::tropical_to_sidereal;

/// Sidereal longitude of the Sun in degrees.
///
/// `L = 280.460 + 0.9856474·n`, `g = 357.528 + 0.9856003·n`,
/// `λ = L + 1.915·sin g + 0.020·sin 2g`, with `n` days since J2000.0.
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let n = jd - J2000_JD;
    let mean_lon = (280.460 + 0.985_647_4 * n).rem_euclid(360.0);
    let g = (357.528 + 0.985_600_3 * n).rem_euclid(360.0).to_radians();
    let tropical = mean_lon + 1.915 * g.sin() + 0.020 * (2.0 * g).sin();
    tropical_to_sidereal(tropical, jd)
}

/// Sidereal longitude of the Moon in degrees.
///
/// `L = 218.316 + 13.176396·n`, `M = 134.963 + 13.064993·n`,
/// `λ = L + 6.289·sin M`.
///
/// Only the equation of centre is applied. The mean elongation
/// `D = 297.850 + 12.190749·n` is computed by [`moon_mean_elongation_deg`]
/// but does not enter the longitude; evection and variation are left out.
pub fn moon_longitude_deg(jd: f64) -> f64 {
    let n = jd - J2000_JD;
    let mean_lon = (218.316 + 13.176_396 * n).rem_euclid(360.0);
    let m = (134.963 + 13.064_993 * n).rem_euclid(360.0).to_radians();
    let tropical = mean_lon + 6.289 * m.sin();
    tropical_to_sidereal(tropical, jd)
}

/// Moon's mean elongation from the Sun in degrees, [0, 360).
pub fn moon_mean_elongation_deg(jd: f64) -> f64 {
    (297.850 + 12.190_749 * (jd - J2000_JD)).rem_euclid(360.0)
}
