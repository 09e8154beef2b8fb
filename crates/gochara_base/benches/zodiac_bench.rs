use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gochara_base::{
    CoordinateSystem, LinearAyanamsha, ayanamsha_for_year, nakshatra_from_longitude,
    nakshatra_from_tropical, normalize_360, rashi_from_longitude, rashi_from_tropical,
    resolve_longitude,
};
use gochara_time::UtcTime;

fn ayanamsha_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("linear_for_year", |b| {
        b.iter(|| ayanamsha_for_year(black_box(2025)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let tropical_lon = 123.456;
    let utc = UtcTime::from_date(2025, 3, 21);
    let model = LinearAyanamsha::default();

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("normalize_360", |b| {
        b.iter(|| normalize_360(black_box(-1234.5)))
    });
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(tropical_lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(tropical_lon)))
    });
    group.bench_function("rashi_from_tropical", |b| {
        b.iter(|| rashi_from_tropical(black_box(tropical_lon), &utc, &model))
    });
    group.bench_function("nakshatra_from_tropical", |b| {
        b.iter(|| nakshatra_from_tropical(black_box(tropical_lon), &utc, &model))
    });
    group.bench_function("resolve_sidereal", |b| {
        b.iter(|| {
            resolve_longitude(
                black_box(tropical_lon),
                &utc,
                CoordinateSystem::Sidereal,
                &model,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, zodiac_bench);
criterion_main!(benches);
