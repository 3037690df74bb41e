use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

use jyotish_time::{BirthMoment, parse_date};
use jyotish_vedic_base::{
    CompatibilityResult, DailyHoroscope, GeoLocation, Kundali, Nakshatra, NakshatraInfo,
    NumerologyResult, Rashi, RashiInfo, VimshottariDasha, calculate_compatibility,
    calculate_kundali, calculate_numerology, name_number, nakshatra_from_longitude,
    rashi_from_longitude, vimshottari_mahadashas,
};

use crate::error::JyotishError;

/// UTC offset assumed when the caller gives none (IST).
pub const DEFAULT_TZ_OFFSET_HOURS: f64 = 5.5;

/// Log a rejected request and pass the error through.
fn rejected(op: &'static str) -> impl Fn(&JyotishError) {
    move |e| warn!(op = op, error = %e, "request rejected")
}

fn finite(value: f64, what: &str) -> Result<f64, JyotishError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(JyotishError::Validation(format!("{what} must be a finite number")))
    }
}

fn birth_input(
    birth_date: &str,
    birth_time: &str,
    latitude: f64,
    longitude: f64,
    tz_offset: Option<f64>,
) -> Result<(BirthMoment, GeoLocation), JyotishError> {
    let tz = tz_offset.unwrap_or(DEFAULT_TZ_OFFSET_HOURS);
    let moment = BirthMoment::parse(birth_date, birth_time, tz)?;
    let location = GeoLocation::checked(latitude, longitude)?;
    Ok((moment, location))
}

/// Birth chart from a `YYYY-MM-DD` date, `HH:MM[:SS]` local time, location
/// and UTC offset in hours (default [`DEFAULT_TZ_OFFSET_HOURS`]).
///
/// # Errors
/// `Validation` for unparseable date/time, |latitude| > 90, non-finite
/// coordinates or an offset outside [-14, 14]; `Computation` when the
/// Lagna is undefined (latitude exactly ±90).
pub fn compute_kundali(
    birth_date: &str,
    birth_time: &str,
    latitude: f64,
    longitude: f64,
    tz_offset: Option<f64>,
) -> Result<Kundali, JyotishError> {
    let run = || -> Result<Kundali, JyotishError> {
        let (moment, location) =
            birth_input(birth_date, birth_time, latitude, longitude, tz_offset)?;
        let kundali = calculate_kundali(&moment, &location)?;
        debug!(
            %moment,
            lagna = kundali.lagna.longitude,
            moon = kundali.moon.point.longitude,
            "kundali computed"
        );
        Ok(kundali)
    };
    run().inspect_err(rejected("kundali"))
}

/// Numerology from a `YYYY-MM-DD` date and an optional name.
///
/// A missing or blank name omits the name number. A non-blank name with no
/// scoring letters (digits, punctuation, non-Latin script only) is rejected.
pub fn compute_numerology(
    birth_date: &str,
    name: Option<&str>,
) -> Result<NumerologyResult, JyotishError> {
    let run = || -> Result<NumerologyResult, JyotishError> {
        let date = parse_date(birth_date)?;
        let name = name.filter(|n| !n.trim().is_empty());
        if let Some(n) = name.filter(|n| name_number(n).is_none()) {
            return Err(JyotishError::Validation(format!(
                "name '{n}' has no letters to score"
            )));
        }
        let result = calculate_numerology(date, name);
        debug!(
            psychic = result.psychic.number,
            destiny = result.destiny.number,
            "numerology computed"
        );
        Ok(result)
    };
    run().inspect_err(rejected("numerology"))
}

/// Ashtakoota compatibility from two sidereal Moon longitudes in degrees.
///
/// Longitudes outside [0, 360) wrap; only non-finite values are rejected.
pub fn compute_compatibility(
    moon_lon_1: f64,
    moon_lon_2: f64,
) -> Result<CompatibilityResult, JyotishError> {
    let run = || -> Result<CompatibilityResult, JyotishError> {
        let a = finite(moon_lon_1, "first Moon longitude")?;
        let b = finite(moon_lon_2, "second Moon longitude")?;
        let result = calculate_compatibility(a, b);
        debug!(
            total = result.total_score,
            percentage = result.percentage,
            "compatibility computed"
        );
        Ok(result)
    };
    run().inspect_err(rejected("compatibility"))
}

/// Daily horoscope for a Moon rashi index (0-11).
///
/// `date` is `YYYY-MM-DD`; when absent the current UTC date is used.
pub fn daily_horoscope(
    moon_rashi_index: i64,
    date: Option<&str>,
) -> Result<DailyHoroscope, JyotishError> {
    let run = || -> Result<DailyHoroscope, JyotishError> {
        let date: NaiveDate = match date {
            Some(s) => parse_date(s)?,
            None => Utc::now().date_naive(),
        };
        let result = jyotish_vedic_base::daily_horoscope(moon_rashi_index, date)?;
        debug!(rashi = result.rashi.name(), %date, "horoscope computed");
        Ok(result)
    };
    run().inspect_err(rejected("horoscope"))
}

/// Vimshottari mahadashas for a birth, from the chart's Moon and Julian Day.
pub fn compute_dasha(
    birth_date: &str,
    birth_time: &str,
    latitude: f64,
    longitude: f64,
    tz_offset: Option<f64>,
) -> Result<VimshottariDasha, JyotishError> {
    let kundali = compute_kundali(birth_date, birth_time, latitude, longitude, tz_offset)?;
    let dasha = vimshottari_mahadashas(kundali.moon.point.longitude, kundali.julian_day);
    debug!(
        first = dasha.periods[0].lord.english_name(),
        balance_years = dasha.balance_years,
        "dasha computed"
    );
    Ok(dasha)
}

/// Rashi of a sidereal longitude.
pub fn rashi(longitude: f64) -> Result<RashiInfo, JyotishError> {
    finite(longitude, "longitude")
        .map(rashi_from_longitude)
        .inspect_err(rejected("rashi"))
}

/// Nakshatra and pada of a sidereal longitude.
pub fn nakshatra(longitude: f64) -> Result<NakshatraInfo, JyotishError> {
    finite(longitude, "longitude")
        .map(nakshatra_from_longitude)
        .inspect_err(rejected("nakshatra"))
}

/// The 12 rashis in index order.
pub fn rashi_table() -> &'static [Rashi; 12] {
    jyotish_vedic_base::rashi_table()
}

/// The 27 nakshatras in index order.
pub fn nakshatra_table() -> &'static [Nakshatra; 27] {
    jyotish_vedic_base::nakshatra_table()
}
