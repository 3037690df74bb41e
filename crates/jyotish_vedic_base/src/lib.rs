//! Approximate Vedic astrology calculations.
//!
//! This crate provides:
//! - Lahiri-style linear ayanamsha and closed-form Sun/Moon/Lagna longitudes
//! - Rashi (12 signs) and nakshatra (27 mansions, 4 padas) classification
//! - Whole-sign bhavas and the assembled birth chart (`Kundali`)
//! - Psychic/destiny/Chaldean name numerology
//! - Ashtakoota compatibility and a rotating daily horoscope
//! - Vimshottari mahadasha sequence
//!
//! Positions come from low-order trigonometric series, not an ephemeris.
//! Every function is pure; only the Lagna can fail (at the poles).

pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod horoscope;
pub mod koota;
pub mod kundali;
pub mod lagna;
pub mod location;
pub mod nakshatra;
pub mod numerology;
pub mod position;
pub mod rashi;
pub mod util;

pub use ayanamsha::{AYANAMSHA_J2000_DEG, ayanamsha_deg, tropical_to_sidereal};
pub use bhava::{Bhava, bhavas_from_lagna};
pub use dasha::{DashaPeriod, VimshottariDasha, vimshottari_mahadashas};
pub use error::{ErrorKind, VedicError};
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use horoscope::{DailyHoroscope, daily_horoscope};
pub use koota::{
    ALL_KOOTAS, CompatibilityResult, Koota, KootaScore, MAX_TOTAL_SCORE, PersonProfile,
    calculate_compatibility,
};
pub use kundali::{BirthDetails, ChartPoint, Kundali, MoonPoint, calculate_kundali};
pub use lagna::lagna_longitude_deg;
pub use location::GeoLocation;
pub use nakshatra::{
    ALL_NAKSHATRAS_27, Gana, NAKSHATRA_SPAN_27, Nadi, Nakshatra, NakshatraInfo,
    nakshatra_from_longitude, nakshatra_table,
};
pub use numerology::{
    NumberMeaning, NumberReading, NumerologyResult, calculate_numerology, destiny_number,
    name_number, psychic_number,
};
pub use position::{moon_longitude_deg, sun_longitude_deg};
pub use rashi::{
    ALL_RASHIS, Dms, Element, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude,
    rashi_table,
};
