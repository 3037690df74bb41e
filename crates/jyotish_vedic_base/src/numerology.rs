//! Vedic numerology: psychic, destiny and Chaldean name numbers.
//!
//! Every number is a digital root in 1-9. Each maps to a ruling graha,
//! a short trait summary and a lucky weekday.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::graha::Graha;
use crate::util::digital_root;

/// Ruling graha, traits and lucky day of a root number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    pub planet: Graha,
    pub traits: &'static str,
    pub lucky_day: &'static str,
}

/// Meanings for roots 1..=9, indexed by `n - 1`.
const MEANINGS: [NumberMeaning; 9] = [
    NumberMeaning {
        planet: Graha::Surya,
        traits: "Leadership, independence, ambition",
        lucky_day: "Sunday",
    },
    NumberMeaning {
        planet: Graha::Chandra,
        traits: "Intuitive, diplomatic, sensitive",
        lucky_day: "Monday",
    },
    NumberMeaning {
        planet: Graha::Guru,
        traits: "Creative, optimistic, expressive",
        lucky_day: "Thursday",
    },
    NumberMeaning {
        planet: Graha::Rahu,
        traits: "Practical, disciplined, hardworking",
        lucky_day: "Sunday",
    },
    NumberMeaning {
        planet: Graha::Buddh,
        traits: "Versatile, adventurous, freedom-loving",
        lucky_day: "Wednesday",
    },
    NumberMeaning {
        planet: Graha::Shukra,
        traits: "Loving, nurturing, artistic",
        lucky_day: "Friday",
    },
    NumberMeaning {
        planet: Graha::Ketu,
        traits: "Spiritual, analytical, introspective",
        lucky_day: "Monday",
    },
    NumberMeaning {
        planet: Graha::Shani,
        traits: "Ambitious, authoritative, material success",
        lucky_day: "Saturday",
    },
    NumberMeaning {
        planet: Graha::Mangal,
        traits: "Courageous, energetic, humanitarian",
        lucky_day: "Tuesday",
    },
];

/// Meaning of a root number, `None` outside 1..=9.
pub fn number_meaning(n: u8) -> Option<&'static NumberMeaning> {
    match n {
        1..=9 => Some(&MEANINGS[usize::from(n - 1)]),
        _ => None,
    }
}

/// Chaldean value of a letter (case-insensitive), `None` for non-letters.
pub const fn chaldean_value(c: char) -> Option<u8> {
    match c.to_ascii_lowercase() {
        'a' | 'i' | 'j' | 'q' | 'y' => Some(1),
        'b' | 'k' | 'r' => Some(2),
        'c' | 'g' | 'l' | 's' => Some(3),
        'd' | 'm' | 't' => Some(4),
        'e' | 'h' | 'n' | 'x' => Some(5),
        'u' | 'v' | 'w' => Some(6),
        'o' | 'z' => Some(7),
        'f' | 'p' => Some(8),
        _ => None,
    }
}

/// Psychic (Moolank) number: digital root of the day of month.
pub fn psychic_number(date: NaiveDate) -> u8 {
    digital_root(u64::from(date.day()))
}

/// Destiny (Bhagyank) number: digital root of day + month + year.
///
/// The year is added as a whole number, not digit by digit. Years before
/// 1 CE are folded by absolute value.
pub fn destiny_number(date: NaiveDate) -> u8 {
    let sum = u64::from(date.day())
        + u64::from(date.month())
        + u64::from(date.year().unsigned_abs());
    digital_root(sum)
}

/// Name number: Chaldean letter sum reduced to a digital root.
///
/// Characters outside a-z are ignored. Returns `None` when no letter
/// contributes, since a root of 0 has no meaning.
pub fn name_number(name: &str) -> Option<u8> {
    let sum: u64 = name
        .chars()
        .filter_map(chaldean_value)
        .map(u64::from)
        .sum();
    match digital_root(sum) {
        0 => None,
        n => Some(n),
    }
}

/// A number with its meaning and what it describes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberReading {
    pub number: u8,
    pub meaning: NumberMeaning,
    pub description: &'static str,
}

impl NumberReading {
    fn new(number: u8, description: &'static str) -> Option<Self> {
        number_meaning(number).map(|meaning| Self {
            number,
            meaning: *meaning,
            description,
        })
    }
}

/// Full numerology profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumerologyResult {
    pub birth_date: NaiveDate,
    pub psychic: NumberReading,
    pub destiny: NumberReading,
    /// Present only when a name with at least one scoring letter was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<NumberReading>,
}

const PSYCHIC_DESCRIPTION: &str = "Reveals your inner self and how you see yourself";
const DESTINY_DESCRIPTION: &str = "Reveals your life path and what you're destined to achieve";
const NAME_DESCRIPTION: &str = "Reveals how others perceive you";

/// Compute the numerology profile for a birth date and optional name.
///
/// Psychic and destiny numbers of a valid date are always in 1..=9, so
/// only the name reading can be absent.
pub fn calculate_numerology(birth_date: NaiveDate, name: Option<&str>) -> NumerologyResult {
    let psychic = psychic_number(birth_date);
    let destiny = destiny_number(birth_date);
    NumerologyResult {
        birth_date,
        psychic: NumberReading {
            number: psychic,
            meaning: MEANINGS[usize::from(psychic - 1)],
            description: PSYCHIC_DESCRIPTION,
        },
        destiny: NumberReading {
            number: destiny,
            meaning: MEANINGS[usize::from(destiny - 1)],
            description: DESTINY_DESCRIPTION,
        },
        name: name
            .and_then(name_number)
            .and_then(|n| NumberReading::new(n, NAME_DESCRIPTION)),
    }
}
