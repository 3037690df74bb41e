//! End-to-end tests through the facade.

use jyotish_rs::*;

#[test]
fn kundali_then_match() {
    let a = compute_kundali("1995-07-15", "10:30", 28.6139, 77.2090, None).unwrap();
    let b = compute_kundali("1993-11-02", "06:15", 19.0760, 72.8777, Some(5.5)).unwrap();
    let r = compute_compatibility(a.moon.point.longitude, b.moon.point.longitude).unwrap();
    assert!(r.total_score <= 36);
    assert_eq!(r.person1.rashi, a.moon.point.rashi.rashi);
    assert_eq!(r.person2.nakshatra, b.moon.nakshatra.nakshatra);
}

#[test]
fn validation_failures() {
    let cases = [
        compute_kundali("1995-02-30", "10:30", 28.6, 77.2, None),
        compute_kundali("1995-07-15", "25:00", 28.6, 77.2, None),
        compute_kundali("1995-07-15", "10:30", 95.0, 77.2, None),
        compute_kundali("1995-07-15", "10:30", f64::NAN, 77.2, None),
        compute_kundali("1995-07-15", "10:30", 28.6, 77.2, Some(15.0)),
        compute_kundali("1995-07-15", "10:30", 28.6, 77.2, Some(f64::NAN)),
    ];
    for (i, c) in cases.into_iter().enumerate() {
        let e = c.unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Validation, "case {i}: {e}");
    }
}

#[test]
fn pole_is_a_computation_failure() {
    let e = compute_kundali("1995-07-15", "10:30", 90.0, 0.0, None).unwrap_err();
    assert!(matches!(e, JyotishError::Computation(_)), "{e}");
}

#[test]
fn horoscope_index_bounds() {
    assert!(daily_horoscope(0, Some("2024-01-01")).is_ok());
    assert!(daily_horoscope(11, None).is_ok());
    let e = daily_horoscope(12, Some("2024-01-01")).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Validation);
    let e = daily_horoscope(3, Some("01/01/2024")).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Validation);
}

#[test]
fn numerology_through_facade() {
    let r = compute_numerology("1995-07-15", Some("Test User")).unwrap();
    assert_eq!((r.psychic.number, r.destiny.number), (6, 1));
    assert_eq!(r.name.map(|n| n.number), Some(5));
    assert!(compute_numerology("1995-07-15", None).unwrap().name.is_none());
}

#[test]
fn dasha_through_facade() {
    let d = compute_dasha("1995-07-15", "10:30", 28.6139, 77.2090, None).unwrap();
    assert_eq!(d.periods[0].lord, Graha::Mangal);
    assert_eq!(d.periods.len(), 9);
}

#[test]
fn reference_tables() {
    assert_eq!(rashi_table().len(), 12);
    assert_eq!(nakshatra_table().len(), 27);
    assert_eq!(rashi_table()[7].name(), "Vrishchika");
    assert_eq!(nakshatra_table()[22].name(), "Dhanishta");
}

#[test]
fn kundali_json_shape() {
    let k = compute_kundali("1995-07-15", "10:30", 28.6139, 77.2090, None).unwrap();
    let v = serde_json::to_value(&k).unwrap();
    assert_eq!(v["birth_details"]["timezone"], "UTC+5.5");
    assert_eq!(v["birth_details"]["moment"]["date"], "1995-07-15");
    assert_eq!(v["lagna"]["rashi"]["rashi"]["name"], "Mithuna");
    assert_eq!(v["lagna"]["rashi"]["rashi"]["lord"], "Mercury");
    assert_eq!(v["moon"]["nakshatra"]["pada"], 4);
    assert_eq!(v["houses"].as_array().map(Vec::len), Some(12));
    assert_eq!(v["ayanamsha"], 23.7936);
}

#[test]
fn compatibility_json_shape() {
    let r = compute_compatibility(305.5379, 100.0).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["max_score"], 36);
    assert_eq!(v["scores"][4]["koota"], "Graha Maitri");
    assert_eq!(v["scores"][7]["description"], "Health and genetic compatibility");
    assert_eq!(v["person1"]["gana"], "Rakshasa");
    assert_eq!(v["verdict"], "Average match - Proceed with caution and remedies");
}
