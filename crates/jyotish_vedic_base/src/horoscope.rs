//! Daily horoscope rotation keyed by Moon rashi and day of year.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::VedicError;
use crate::rashi::{Element, Rashi};

const THEMES: [[&str; 3]; 12] = [
    ["New beginnings", "Take initiative", "Leadership opportunities"],
    ["Financial matters", "Stability focus", "Sensory pleasures"],
    ["Communication", "Short travels", "Learning"],
    ["Home and family", "Emotional matters", "Property"],
    ["Creative expression", "Romance", "Children matters"],
    ["Health focus", "Service to others", "Daily routines"],
    ["Partnerships", "Legal matters", "Public dealings"],
    ["Transformation", "Shared resources", "Deep insights"],
    ["Higher learning", "Long journeys", "Spiritual growth"],
    ["Career matters", "Public image", "Authority"],
    ["Friendships", "Social activities", "Future planning"],
    ["Solitude beneficial", "Spiritual practices", "Hidden matters"],
];

/// Lucky colours of an element.
pub const fn element_colors(element: Element) -> [&'static str; 3] {
    match element {
        Element::Fire => ["Red", "Orange", "Gold"],
        Element::Earth => ["Green", "Brown", "Yellow"],
        Element::Air => ["White", "Light Blue", "Grey"],
        Element::Water => ["Blue", "Silver", "Purple"],
    }
}

/// Deterministic daily reading for one Moon sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyHoroscope {
    pub rashi: Rashi,
    pub date: NaiveDate,
    /// Index into the 12-entry theme table.
    pub theme_index: u8,
    pub themes: [&'static str; 3],
    pub lucky_numbers: [u8; 3],
    pub lucky_colors: [&'static str; 3],
    pub favorable_time: &'static str,
    pub caution_time: &'static str,
}

/// Daily horoscope for a Moon rashi index (0-11) on `date`.
///
/// The day seed is the 1-based day of year, so the same (rashi, date)
/// always yields the same reading.
pub fn daily_horoscope(rashi_index: i64, date: NaiveDate) -> Result<DailyHoroscope, VedicError> {
    let rashi = u8::try_from(rashi_index)
        .ok()
        .and_then(Rashi::from_index)
        .ok_or(VedicError::InvalidRashiIndex(rashi_index))?;

    let idx = u32::from(rashi.index());
    let seed = date.ordinal();
    let theme_index = ((idx + seed) % 12) as u8;
    let lucky_numbers: [u8; 3] = std::array::from_fn(|i| ((idx + seed + i as u32) % 9 + 1) as u8);

    Ok(DailyHoroscope {
        rashi,
        date,
        theme_index,
        themes: THEMES[usize::from(theme_index)],
        lucky_numbers,
        lucky_colors: element_colors(rashi.element()),
        favorable_time: if seed % 2 == 0 { "Morning" } else { "Evening" },
        caution_time: if seed % 3 == 0 { "Afternoon" } else { "Late night" },
    })
}
