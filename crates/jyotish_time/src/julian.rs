//! Gregorian calendar ↔ Julian Day conversion.
//!
//! Forward conversion is the classic Meeus algorithm (Astronomical
//! Algorithms, ch. 7) with the Gregorian century correction always applied,
//! i.e. the calendar is treated as proleptic Gregorian for every year.

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Day for a Gregorian calendar date and decimal hour of day.
///
/// January and February are treated as months 13 and 14 of the previous
/// year before the century correction `B = 2 - A + A/4` (integer parts) is
/// applied.
///
/// `hour` is not range-checked: values below 0 or at/above 24 shift the
/// result across day boundaries through the `hour / 24` term, which is how
/// a negative UTC hour after subtracting a time-zone offset lands on the
/// previous calendar day. The date itself is not validated either.
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let m = f64::from(m);

    let a = (y / 100.0).trunc();
    let b = 2.0 - a + (a / 4.0).trunc();

    (365.25 * (y + 4716.0)).trunc() + (30.6001 * (m + 1.0)).trunc() + f64::from(day)
        + hour / 24.0
        + b
        - 1524.5
}

/// Inverse of [`julian_day`]: returns `(year, month, day_with_fraction)`.
///
/// Uses the proleptic Gregorian calendar for all epochs so that it round
/// trips with [`julian_day`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.trunc();
    let f = jd - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).trunc();
    let a = z + 1.0 + alpha - (alpha / 4.0).trunc();

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).trunc();
    let d = (365.25 * c).trunc();
    let e = ((b - d) / 30.6001).trunc();

    let day = b - d - (30.6001 * e).trunc() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
