//! Integration tests for rashi and nakshatra classification.

use jyotish_vedic_base::{
    ALL_NAKSHATRAS_27, ALL_RASHIS, Gana, NAKSHATRA_SPAN_27, Nadi, Nakshatra, Rashi,
    nakshatra_from_longitude, rashi_from_longitude,
};

// ---------------------------------------------------------------------------
// Rashi
// ---------------------------------------------------------------------------

#[test]
fn rashi_midpoints() {
    for (i, r) in ALL_RASHIS.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        let info = rashi_from_longitude(lon);
        assert_eq!(info.rashi, *r, "rashi at {lon} deg");
        assert_eq!(info.rashi_index, i as u8);
        assert!((info.degrees_in_rashi - 15.0).abs() < 1e-9);
    }
}

#[test]
fn rashi_periodic_over_360() {
    for k in 0..720 {
        let lon = f64::from(k) * 0.5 + 0.25;
        let a = rashi_from_longitude(lon);
        let b = rashi_from_longitude(lon + 360.0);
        let c = rashi_from_longitude(lon - 720.0);
        assert_eq!(a.rashi, b.rashi, "lon {lon}");
        assert_eq!(a.rashi, c.rashi, "lon {lon}");
    }
}

#[test]
fn rashi_degrees_in_range() {
    for k in -400..=4000 {
        let lon = f64::from(k) * 0.173;
        let info = rashi_from_longitude(lon);
        assert!(info.rashi_index <= 11);
        assert!(
            (0.0..30.0).contains(&info.degrees_in_rashi),
            "degrees_in_rashi = {} at {lon}",
            info.degrees_in_rashi
        );
    }
}

#[test]
fn rashi_round_trip_contains_longitude() {
    for k in 0..3600 {
        let lon = f64::from(k) * 0.1 + 0.05;
        let info = rashi_from_longitude(lon);
        let (start, end) = info.rashi.span_deg();
        assert!(lon >= start && lon < end, "{lon} not in [{start}, {end})");
    }
}

#[test]
fn rashi_dms_precision() {
    // 45 deg 30' 15.5" -> Vrishabha 15 deg 30' 15.5"
    let lon = 45.0 + 30.0 / 60.0 + 15.5 / 3600.0;
    let info = rashi_from_longitude(lon);
    assert_eq!(info.rashi, Rashi::Vrishabha);
    assert_eq!(info.dms.degrees, 15);
    assert_eq!(info.dms.minutes, 30);
    assert!((info.dms.seconds - 15.5).abs() < 0.01, "seconds = {}", info.dms.seconds);
}

#[test]
fn negative_longitude_wraps() {
    let info = rashi_from_longitude(-10.0);
    assert_eq!(info.rashi, Rashi::Meena);
    assert!((info.degrees_in_rashi - 20.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Nakshatra
// ---------------------------------------------------------------------------

#[test]
fn nakshatra_midpoints() {
    for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
        let lon = (i as f64 + 0.6) * NAKSHATRA_SPAN_27;
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra, *n);
        assert_eq!(info.nakshatra_index, i as u8);
        assert_eq!(info.pada, 3);
    }
}

#[test]
fn nakshatra_pada_in_range_sweep() {
    for k in -200..=5000 {
        let lon = f64::from(k) * 0.0791;
        let info = nakshatra_from_longitude(lon);
        assert!(info.nakshatra_index <= 26);
        assert!((1..=4).contains(&info.pada), "pada {} at {lon}", info.pada);
        let (start, end) = info.nakshatra.span_deg();
        let wrapped = lon.rem_euclid(360.0);
        assert!(wrapped >= start - 1e-9 && wrapped < end + 1e-9);
    }
}

#[test]
fn nakshatra_periodic_over_360() {
    for k in 0..270 {
        let lon = f64::from(k) * 1.333 + 0.1;
        assert_eq!(
            nakshatra_from_longitude(lon).nakshatra,
            nakshatra_from_longitude(lon + 360.0).nakshatra
        );
    }
}

#[test]
fn pada_boundaries() {
    let info = nakshatra_from_longitude(0.0);
    assert_eq!((info.nakshatra, info.pada), (Nakshatra::Ashwini, 1));
    let info = nakshatra_from_longitude(3.4);
    assert_eq!(info.pada, 2);
    let info = nakshatra_from_longitude(13.3);
    assert_eq!(info.pada, 4);
    let info = nakshatra_from_longitude(359.99);
    assert_eq!((info.nakshatra, info.pada), (Nakshatra::Revati, 4));
}

#[test]
fn gana_and_nadi_classes() {
    assert_eq!(Nakshatra::Ashwini.gana(), Gana::Deva);
    assert_eq!(Nakshatra::Bharani.gana(), Gana::Manushya);
    assert_eq!(Nakshatra::Krittika.gana(), Gana::Rakshasa);
    assert_eq!(Nakshatra::Revati.gana(), Gana::Deva);
    assert_eq!(Nakshatra::Ashwini.nadi(), Nadi::Aadi);
    assert_eq!(Nakshatra::Bharani.nadi(), Nadi::Madhya);
    assert_eq!(Nakshatra::Krittika.nadi(), Nadi::Antya);
}
