//! Ashtakoota (eight-factor) compatibility between two Moon positions.
//!
//! Each koota is scored independently from the two persons' Moon rashi and
//! nakshatra. Maximum points per koota: Varna 1, Vashya 2, Tara 3, Yoni 4,
//! Graha Maitri 5, Gana 6, Bhakoot 7, Nadi 8; total 36.
//!
//! The scoring rules here are the simplified ones used by the chart
//! service: Yoni uses index distance rather than the animal table, and
//! Graha Maitri compares lords for equality only.

use serde::Serialize;

use crate::nakshatra::{Gana, Nadi, Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::round_to;

/// Sum of all koota maxima.
pub const MAX_TOTAL_SCORE: u8 = 36;

/// The eight kootas in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Maximum points; equals the koota's 1-based position.
    pub const fn max_score(self) -> u8 {
        match self {
            Self::Varna => 1,
            Self::Vashya => 2,
            Self::Tara => 3,
            Self::Yoni => 4,
            Self::GrahaMaitri => 5,
            Self::Gana => 6,
            Self::Bhakoot => 7,
            Self::Nadi => 8,
        }
    }

    /// What the koota measures.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Varna => "Spiritual/work compatibility",
            Self::Vashya => "Mutual attraction and influence",
            Self::Tara => "Destiny and health compatibility",
            Self::Yoni => "Physical and intimate compatibility",
            Self::GrahaMaitri => "Mental and intellectual compatibility",
            Self::Gana => "Temperament compatibility",
            Self::Bhakoot => "Love, family prosperity, and financial compatibility",
            Self::Nadi => "Health and genetic compatibility",
        }
    }

    /// Score this koota for two persons (order matters for Varna and Tara).
    pub fn score(self, p1: &PersonProfile, p2: &PersonProfile) -> u8 {
        let n1 = p1.nakshatra.index();
        let n2 = p2.nakshatra.index();
        match self {
            Self::Varna => varna_score(n1, n2),
            Self::Vashya => vashya_score(p1.rashi, p2.rashi),
            Self::Tara => tara_score(n1, n2),
            Self::Yoni => yoni_score(n1, n2),
            Self::GrahaMaitri => graha_maitri_score(p1.rashi, p2.rashi),
            Self::Gana => gana_score(p1.gana, p2.gana),
            Self::Bhakoot => bhakoot_score(p1.rashi, p2.rashi),
            Self::Nadi => nadi_score(p1.nadi, p2.nadi),
        }
    }
}

impl Serialize for Koota {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

pub fn varna_score(n1: u8, n2: u8) -> u8 {
    if n1 % 3 >= n2 % 3 { 1 } else { 0 }
}

pub fn vashya_score(r1: Rashi, r2: Rashi) -> u8 {
    if r1.element() == r2.element() { 2 } else { 1 }
}

/// Tara counted forward from person 1's nakshatra to person 2's.
pub fn tara_score(n1: u8, n2: u8) -> u8 {
    let count = (i16::from(n2) - i16::from(n1)).rem_euclid(27);
    let group = count % 9 + 1;
    if matches!(group, 1 | 2 | 4 | 6 | 8 | 9) { 3 } else { 0 }
}

pub fn yoni_score(n1: u8, n2: u8) -> u8 {
    match n1.abs_diff(n2) % 14 {
        0..=2 => 4,
        3..=5 => 2,
        _ => 0,
    }
}

pub fn graha_maitri_score(r1: Rashi, r2: Rashi) -> u8 {
    if r1.lord() == r2.lord() { 5 } else { 3 }
}

pub fn gana_score(g1: Gana, g2: Gana) -> u8 {
    match (g1, g2) {
        (a, b) if a == b => 6,
        (Gana::Deva, Gana::Manushya) | (Gana::Manushya, Gana::Deva) => 5,
        (Gana::Manushya, Gana::Rakshasa) | (Gana::Rakshasa, Gana::Manushya) => 1,
        _ => 0,
    }
}

/// Zero for the 2/12, 5/9 and 6/8 style separations.
///
/// The separation is the plain index difference (0-11), so 12 never
/// occurs; it stays in the set to keep the rule table complete.
pub fn bhakoot_score(r1: Rashi, r2: Rashi) -> u8 {
    match r1.index().abs_diff(r2.index()) {
        2 | 5 | 6 | 8 | 9 | 12 => 0,
        _ => 7,
    }
}

pub fn nadi_score(d1: Nadi, d2: Nadi) -> u8 {
    if d1 == d2 { 0 } else { 8 }
}

/// One person's Moon-derived attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonProfile {
    pub moon_longitude: f64,
    pub rashi: Rashi,
    pub nakshatra: Nakshatra,
    pub gana: Gana,
    pub nadi: Nadi,
}

impl PersonProfile {
    pub fn from_moon_longitude(moon_longitude: f64) -> Self {
        let rashi = rashi_from_longitude(moon_longitude).rashi;
        let nakshatra = nakshatra_from_longitude(moon_longitude).nakshatra;
        Self {
            moon_longitude,
            rashi,
            nakshatra,
            gana: nakshatra.gana(),
            nadi: nakshatra.nadi(),
        }
    }
}

/// Score of a single koota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KootaScore {
    pub koota: Koota,
    pub score: u8,
    pub max_score: u8,
    pub description: &'static str,
}

/// Full Ashtakoota result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub person1: PersonProfile,
    pub person2: PersonProfile,
    pub scores: [KootaScore; 8],
    pub total_score: u8,
    pub max_score: u8,
    /// `total / 36 * 100` rounded to one decimal.
    pub percentage: f64,
    pub verdict: &'static str,
}

/// Verdict bucket for a percentage.
pub fn verdict(percentage: f64) -> &'static str {
    if percentage >= 75.0 {
        "Excellent match - Highly recommended"
    } else if percentage >= 60.0 {
        "Good match - Recommended with minor considerations"
    } else if percentage >= 50.0 {
        "Average match - Proceed with caution and remedies"
    } else {
        "Below average - Consult a qualified astrologer for remedies"
    }
}

/// Score two persons from their sidereal Moon longitudes.
///
/// Longitudes outside [0, 360) are wrapped by the classifiers.
pub fn calculate_compatibility(moon_lon_1: f64, moon_lon_2: f64) -> CompatibilityResult {
    let person1 = PersonProfile::from_moon_longitude(moon_lon_1);
    let person2 = PersonProfile::from_moon_longitude(moon_lon_2);

    let scores = ALL_KOOTAS.map(|koota| KootaScore {
        koota,
        score: koota.score(&person1, &person2),
        max_score: koota.max_score(),
        description: koota.description(),
    });
    let total_score: u8 = scores.iter().map(|s| s.score).sum();
    let percentage = round_to(
        f64::from(total_score) / f64::from(MAX_TOTAL_SCORE) * 100.0,
        1,
    );

    CompatibilityResult {
        person1,
        person2,
        scores,
        total_score,
        max_score: MAX_TOTAL_SCORE,
        percentage,
        verdict: verdict(percentage),
    }
}
