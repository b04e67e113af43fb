use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use wetfreight_lib::{decompose, MarketObservation, RouteConstantsStore, TceCalculator};

static STORE: Lazy<RouteConstantsStore> =
    Lazy::new(|| RouteConstantsStore::builtin().expect("bundled table loads"));

static DAILY_OBSERVATIONS: Lazy<Vec<MarketObservation>> = Lazy::new(|| {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date");
    (0..365)
        .map(|day| {
            let drift = f64::from(day) * 0.05;
            MarketObservation::new(start + Duration::days(i64::from(day)))
                .with_flat_rate(20.46)
                .with_world_scale(100.0 + drift)
                .with_bunkers(600.0 + drift, 480.0 + drift, 420.0 + drift)
        })
        .collect()
});

fn benchmark_tce(c: &mut Criterion) {
    let store = &*STORE;

    c.bench_function("decompose_td3c", |b| {
        let route = store.lookup("TD3_C").expect("route exists");
        b.iter(|| black_box(decompose(black_box(route))));
    });

    c.bench_function("calc_tc2_37_one_year", |b| {
        let calculator = TceCalculator::new(store);
        let observations = &*DAILY_OBSERVATIONS;
        b.iter(|| {
            let rows = calculator
                .calc("TC2_37", observations)
                .expect("calculation succeeds");
            black_box(rows.len())
        });
    });
}

criterion_group!(benches, benchmark_tce);
criterion_main!(benches);
