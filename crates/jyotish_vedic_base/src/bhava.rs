//! Bhava (house) layout from the Lagna.
//!
//! House *i* (1-12) starts at `lagna + (i - 1) * 30` deg and is labelled
//! with the rashi containing that starting point, plus the starting point's
//! degree inside the rashi. No quadrant cusps are computed, so houses never
//! depend on latitude beyond the Lagna itself.

use serde::Serialize;

use crate::rashi::{RASHI_SPAN, Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// A single bhava (house).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    /// Rashi occupied by the house's starting point.
    pub rashi: Rashi,
    /// Sidereal longitude of the starting point, [0, 360).
    pub start_deg: f64,
    /// Degree of the starting point inside `rashi`, rounded to 2 decimals.
    pub degree: f64,
}

/// Lay out 12 houses of 30 deg each from the Lagna longitude.
pub fn bhavas_from_lagna(lagna_deg: f64) -> [Bhava; 12] {
    std::array::from_fn(|i| {
        let start_deg = normalize_360(lagna_deg + i as f64 * RASHI_SPAN);
        let info = rashi_from_longitude(start_deg);
        Bhava {
            number: i as u8 + 1,
            rashi: info.rashi,
            start_deg,
            degree: info.degree,
        }
    })
}
