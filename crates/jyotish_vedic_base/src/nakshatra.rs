//! Nakshatra (lunar mansion) reference table and longitude classification.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each. Each nakshatra has 4 padas (quarters) of
//! 3 deg 20' each.
//!
//! Also carries the fixed per-nakshatra attributes used by matching:
//! lord (Vimshottari order), presiding deity, gana and nadi.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Lords repeat in this 9-graha cycle from Ashwini.
const NAKSHATRA_LORD_CYCLE: [Graha; 9] = [
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

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Brahma",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Nagas",
            Self::Magha => "Pitris",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitar",
            Self::Chitra => "Vishwakarma",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indra-Agni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirriti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishvedevas",
            Self::Shravana => "Vishnu",
            Self::Dhanishtha => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Aja Ekapada",
            Self::UttaraBhadrapada => "Ahir Budhnya",
            Self::Revati => "Pushan",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishtha => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// Ruling graha; the Vimshottari lord sequence repeats every 9 nakshatras.
    pub const fn lord(self) -> Graha {
        NAKSHATRA_LORD_CYCLE[(self.index() % 9) as usize]
    }

    /// Temperament class used by Gana koota.
    pub const fn gana(self) -> Gana {
        match self.index() {
            0 | 4 | 6 | 10 | 12 | 15 | 19 | 21 | 26 => Gana::Deva,
            1 | 3 | 7 | 9 | 13 | 16 | 20 | 24 => Gana::Manushya,
            2 | 5 | 8 | 11 | 14 | 17 | 18 | 22 | 23 | 25 => Gana::Rakshasa,
            _ => Gana::Manushya,
        }
    }

    /// Nadi third: index mod 3.
    pub const fn nadi(self) -> Nadi {
        match self.index() % 3 {
            0 => Nadi::Aadi,
            1 => Nadi::Madhya,
            _ => Nadi::Antya,
        }
    }

    /// Nakshatra for a 0-based index, `None` outside 0..=26.
    pub const fn from_index(index: u8) -> Option<Nakshatra> {
        if index < 27 {
            Some(ALL_NAKSHATRAS_27[index as usize])
        } else {
            None
        }
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }

    /// Sidereal longitude range `[start, end)` covered by this nakshatra.
    pub fn span_deg(self) -> (f64, f64) {
        let start = f64::from(self.index()) * NAKSHATRA_SPAN_27;
        (start, start + NAKSHATRA_SPAN_27)
    }
}

/// Serialized as the full reference record.
impl Serialize for Nakshatra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Nakshatra", 4)?;
        s.serialize_field("index", &self.index())?;
        s.serialize_field("name", self.name())?;
        s.serialize_field("lord", &self.lord())?;
        s.serialize_field("deity", self.deity())?;
        s.end()
    }
}

/// Gana (temperament) class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Deva => "Deva",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }
}

/// Nadi (constitution) third of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nadi {
    Aadi,
    Madhya,
    Antya,
}

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aadi => "Aadi",
            Self::Madhya => "Madhya",
            Self::Antya => "Antya",
        }
    }
}

/// Result of 27-nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
///
/// Any real longitude is accepted and first normalized into [0, 360).
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = (lon - f64::from(nak_idx) * NAKSHATRA_SPAN_27).max(0.0);
    // Clamp guards a float edge just below the next nakshatra
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = degrees_in_nakshatra - f64::from(pada_idx) * PADA_SPAN;

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}

/// The full read-only nakshatra table, in index order.
pub fn nakshatra_table() -> &'static [Nakshatra; 27] {
    &ALL_NAKSHATRAS_27
}
