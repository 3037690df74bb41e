use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_time::BirthMoment;
use jyotish_vedic_base::{
    GeoLocation, calculate_compatibility, calculate_kundali, calculate_numerology,
    daily_horoscope, lagna_longitude_deg, moon_longitude_deg, nakshatra_from_longitude,
    rashi_from_longitude, sun_longitude_deg, vimshottari_mahadashas,
};

fn position_bench(c: &mut Criterion) {
    let jd = 2_449_913.708_333;
    let loc = GeoLocation::new(28.6139, 77.2090);

    let mut group = c.benchmark_group("position");
    group.bench_function("sun", |b| b.iter(|| sun_longitude_deg(black_box(jd))));
    group.bench_function("moon", |b| b.iter(|| moon_longitude_deg(black_box(jd))));
    group.bench_function("lagna", |b| {
        b.iter(|| lagna_longitude_deg(black_box(jd), black_box(&loc)))
    });
    group.finish();
}

fn classify_bench(c: &mut Criterion) {
    let lon = 305.537_9;

    let mut group = c.benchmark_group("classify");
    group.bench_function("rashi", |b| b.iter(|| rashi_from_longitude(black_box(lon))));
    group.bench_function("nakshatra", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let moment = BirthMoment::parse("1995-07-15", "10:30", 5.5).unwrap();
    let loc = GeoLocation::new(28.6139, 77.2090);
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut group = c.benchmark_group("chart");
    group.bench_function("kundali", |b| {
        b.iter(|| calculate_kundali(black_box(&moment), black_box(&loc)))
    });
    group.bench_function("compatibility", |b| {
        b.iter(|| calculate_compatibility(black_box(305.5379), black_box(100.0)))
    });
    group.bench_function("numerology", |b| {
        b.iter(|| calculate_numerology(black_box(date), black_box(Some("Test User"))))
    });
    group.bench_function("daily_horoscope", |b| {
        b.iter(|| daily_horoscope(black_box(7), black_box(date)))
    });
    group.bench_function("vimshottari", |b| {
        b.iter(|| vimshottari_mahadashas(black_box(305.5379), black_box(2_449_913.708_333)))
    });
    group.finish();
}

criterion_group!(benches, position_bench, classify_bench, chart_bench);
criterion_main!(benches);
