//! Rashi (zodiac sign) reference table and longitude classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude, we identify which rashi the point falls in
//! and express the position within that sign both as decimal degrees and
//! as degrees-minutes-seconds.
//!
//! 12 rashis of 30 deg each, starting from Mesha (Aries) at 0 deg.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::graha::{Graha, rashi_lord};
use crate::util::{normalize_360, round_to};

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element (tattva) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Element cycles Fire, Earth, Air, Water from Mesha.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Ruling graha.
    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi for a 0-based index, `None` if the index is not in 0..=11.
    pub const fn from_index(index: u8) -> Option<Rashi> {
        if index < 12 {
            Some(ALL_RASHIS[index as usize])
        } else {
            None
        }
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    /// Sidereal longitude range `[start, end)` covered by this rashi.
    pub fn span_deg(self) -> (f64, f64) {
        let start = f64::from(self.index()) * RASHI_SPAN;
        (start, start + RASHI_SPAN)
    }
}

/// Serialized as the full reference record.
impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Rashi", 5)?;
        s.serialize_field("index", &self.index())?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("english", self.western_name())?;
        s.serialize_field("lord", &self.lord())?;
        s.serialize_field("element", &self.element())?;
        s.end()
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
    /// `degrees_in_rashi` rounded to 2 decimals, as displayed.
    pub degree: f64,
    /// Position within the rashi as DMS.
    pub dms: Dms,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - f64::from(total_degrees)) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - f64::from(minutes)) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Any real longitude is accepted and first normalized into [0, 360).
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degrees_in_rashi = (lon - f64::from(rashi_idx) * RASHI_SPAN).max(0.0);

    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        degrees_in_rashi,
        degree: round_to(degrees_in_rashi, 2),
        dms: deg_to_dms(degrees_in_rashi),
    }
}

/// The full read-only rashi table, in index order.
pub fn rashi_table() -> &'static [Rashi; 12] {
    &ALL_RASHIS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), Some(*r));
        }
        assert_eq!(Rashi::from_index(12), None);
    }

    #[test]
    fn elements_cycle() {
        assert_eq!(Rashi::Mesha.element(), Element::Fire);
        assert_eq!(Rashi::Vrishabha.element(), Element::Earth);
        assert_eq!(Rashi::Mithuna.element(), Element::Air);
        assert_eq!(Rashi::Karka.element(), Element::Water);
        assert_eq!(Rashi::Dhanu.element(), Element::Fire);
        assert_eq!(Rashi::Meena.element(), Element::Water);
    }

    #[test]
    fn deg_to_dms_known() {
        // 23.853 deg = 23 deg 51' 10.8"
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = f64::from(i) * 30.0;
            let info = rashi_from_longitude(lon);
            assert_eq!(info.rashi_index, i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn rashi_mid_sign() {
        let info = rashi_from_longitude(45.5);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!((info.degrees_in_rashi - 15.5).abs() < 1e-10);
        assert_eq!(info.dms.degrees, 15);
        assert_eq!(info.dms.minutes, 30);
    }

    #[test]
    fn rashi_wrap_around() {
        let info = rashi_from_longitude(365.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!((info.degrees_in_rashi - 5.0).abs() < 1e-10);
    }

    #[test]
    fn rashi_negative() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn displayed_degree_is_rounded() {
        let info = rashi_from_longitude(100.123_456);
        assert_eq!(info.rashi, Rashi::Karka);
        assert!((info.degree - 10.12).abs() < 1e-12);
    }

    #[test]
    fn span_contains_start() {
        let (start, end) = Rashi::Tula.span_deg();
        assert_eq!((start, end), (180.0, 210.0));
    }
}
