//! Vimshottari mahadasha sequence.
//!
//! The 120-year cycle of nine graha periods. The starting lord is the lord
//! of the Moon's nakshatra; the first period runs for the part of that
//! lord's span not yet consumed by the Moon's progress through the
//! nakshatra, and the other eight follow in cyclic order at full length.
//!
//! Provenance: BPHS, Vimshottari dasha chapter.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_from_longitude};

/// Year length used to convert dasha years to days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Length of the full cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Graha order of the cycle.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Period lengths in years, parallel to [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// One mahadasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    /// Julian Day at which the period begins.
    pub start_jd: f64,
    /// Julian Day at which the period ends (exclusive).
    pub end_jd: f64,
    /// Length in dasha years.
    pub years: f64,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// Mahadasha sequence from birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VimshottariDasha {
    pub birth_jd: f64,
    pub moon_longitude: f64,
    /// Fraction of the birth nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Years remaining in the first period at birth.
    pub balance_years: f64,
    pub periods: [DashaPeriod; 9],
}

impl VimshottariDasha {
    /// Period running at `jd`, if inside the nine-period window.
    pub fn period_at(&self, jd: f64) -> Option<&DashaPeriod> {
        self.periods.iter().find(|p| p.contains(jd))
    }
}

/// Position of a graha in [`VIMSHOTTARI_SEQUENCE`].
fn sequence_position(lord: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&g| g == lord)
        .unwrap_or(0)
}

/// Compute the nine mahadashas from birth.
pub fn vimshottari_mahadashas(moon_longitude: f64, birth_jd: f64) -> VimshottariDasha {
    let nak = nakshatra_from_longitude(moon_longitude);
    let first = sequence_position(nak.nakshatra.lord());
    let elapsed_fraction = nak.degrees_in_nakshatra / NAKSHATRA_SPAN_27;
    let balance_years = VIMSHOTTARI_YEARS[first] * (1.0 - elapsed_fraction);

    let mut periods = [DashaPeriod {
        lord: VIMSHOTTARI_SEQUENCE[first],
        start_jd: birth_jd,
        end_jd: birth_jd,
        years: 0.0,
    }; 9];
    let mut start_jd = birth_jd;
    for (i, period) in periods.iter_mut().enumerate() {
        let pos = (first + i) % 9;
        let years = if i == 0 {
            balance_years
        } else {
            VIMSHOTTARI_YEARS[pos]
        };
        let end_jd = start_jd + years * DAYS_PER_YEAR;
        *period = DashaPeriod {
            lord: VIMSHOTTARI_SEQUENCE[pos],
            start_jd,
            end_jd,
            years,
        };
        start_jd = end_jd;
    }

    VimshottariDasha {
        birth_jd,
        moon_longitude,
        elapsed_fraction,
        balance_years,
        periods,
    }
}
