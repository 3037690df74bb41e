//! Golden Julian Day values and birth-moment conversions.

use jyotish_time::{BirthMoment, J2000_JD, gmst_deg, jd_to_calendar, julian_day};

#[test]
fn golden_julian_days() {
    // (year, month, day, hour, expected JD) from Meeus ch. 7 examples
    let cases = [
        (2000, 1, 1, 12.0, 2_451_545.0),
        (1987, 1, 27, 0.0, 2_446_822.5),
        (1987, 6, 19, 12.0, 2_446_966.0),
        (1988, 1, 27, 0.0, 2_447_187.5),
        (1988, 6, 19, 12.0, 2_447_332.0),
        (1900, 1, 1, 0.0, 2_415_020.5),
        (1600, 1, 1, 0.0, 2_305_447.5),
    ];
    for (y, m, d, h, expected) in cases {
        let jd = julian_day(y, m, d, h);
        assert!((jd - expected).abs() < 1e-9, "{y}-{m}-{d} {h}h: {jd} != {expected}");
    }
}

#[test]
fn ist_birth_moment_julian_day() {
    // 1995-07-15 10:30 IST = 05:00 UTC
    let m = BirthMoment::parse("1995-07-15", "10:30", 5.5).unwrap();
    let jd = m.julian_day();
    assert!((jd - julian_day(1995, 7, 15, 5.0)).abs() < 1e-9);
    let (y, mo, d) = jd_to_calendar(jd);
    assert_eq!((y, mo), (1995, 7));
    assert!((d - (15.0 + 5.0 / 24.0)).abs() < 1e-6, "day = {d}");
}

#[test]
fn western_offset_crosses_midnight_forward() {
    // 2024-01-01 22:00 at UTC-5 is 2024-01-02 03:00 UTC
    let m = BirthMoment::parse("2024-01-01", "22:00", -5.0).unwrap();
    assert!((m.utc_hours() - 27.0).abs() < 1e-12);
    assert!((m.julian_day() - julian_day(2024, 1, 2, 3.0)).abs() < 1e-9);
}

#[test]
fn gmst_advances_about_one_degree_per_day() {
    let g0 = gmst_deg(J2000_JD);
    let g1 = gmst_deg(J2000_JD + 1.0);
    let diff = (g1 - g0).rem_euclid(360.0);
    assert!((diff - 0.9856).abs() < 0.001, "daily drift = {diff}");
}
