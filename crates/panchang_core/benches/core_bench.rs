use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_core::{
    Location, festival_for_date, karana_for_date, nakshatra_for_date, sun_times, tithi_for_date,
    yoga_for_date,
};

fn derivation_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 7, 17).unwrap();
    let location = Location::default();

    let mut group = c.benchmark_group("derivations");
    group.bench_function("tithi_for_date", |b| {
        b.iter(|| tithi_for_date(black_box(date)))
    });
    group.bench_function("nakshatra_for_date", |b| {
        b.iter(|| nakshatra_for_date(black_box(date)))
    });
    group.bench_function("yoga_for_date", |b| b.iter(|| yoga_for_date(black_box(date))));
    group.bench_function("karana_for_date", |b| {
        b.iter(|| karana_for_date(black_box(date)))
    });
    group.bench_function("sun_times", |b| {
        b.iter(|| sun_times(black_box(date), &location))
    });
    group.bench_function("festival_for_date", |b| {
        b.iter(|| festival_for_date(black_box(date)))
    });
    group.finish();
}

criterion_group!(benches, derivation_bench);
criterion_main!(benches);
