mod common;

use common::{assert_close, date, fixture_observation, fixture_route, TOLERANCE};
use wetfreight_lib::{freight_usd_mt, gross_freight, Error, MarketObservation};

#[test]
fn derives_freight_from_flat_rate_and_world_scale() {
    let observation = fixture_observation();
    assert_close(freight_usd_mt(&observation).unwrap(), 30.0, TOLERANCE);
    assert_close(
        gross_freight(&fixture_route(), &observation).unwrap(),
        300_000.0,
        TOLERANCE,
    );
}

#[test]
fn precomputed_freight_takes_precedence() {
    let observation = MarketObservation::new(date(2021, 10, 6))
        .with_freight_usd_mt(25.0)
        .with_world_scale(150.0);
    assert_close(
        gross_freight(&fixture_route(), &observation).unwrap(),
        250_000.0,
        TOLERANCE,
    );
}

#[test]
fn missing_flat_rate_is_reported() {
    let observation = MarketObservation::new(date(2021, 10, 6)).with_world_scale(100.0);
    let err = gross_freight(&fixture_route(), &observation).unwrap_err();
    match err {
        Error::MissingField { timestamp, field } => {
            assert_eq!(timestamp, date(2021, 10, 6));
            assert_eq!(field, "FlatRate");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn grt_adder_applies_only_when_configured() {
    let observation = fixture_observation();
    let mut route = fixture_route();

    route.adjustments.dollars_per_grt = None;
    let absent = gross_freight(&route, &observation).unwrap();

    route.adjustments.dollars_per_grt = Some(0.0);
    let zero = gross_freight(&route, &observation).unwrap();

    route.adjustments.dollars_per_grt = Some(1.5);
    let applied = gross_freight(&route, &observation).unwrap();

    assert_close(absent, 300_000.0, TOLERANCE);
    assert_close(zero, 300_000.0, TOLERANCE);
    assert_close(applied, 300_000.0 + 5_000.0 * 1.5, TOLERANCE);
}

#[test]
fn world_scale_fixed_differential_scales_with_cargo() {
    let mut route = fixture_route();
    route.adjustments.ws_fixed_differential = Some(0.27);
    assert_close(
        gross_freight(&route, &fixture_observation()).unwrap(),
        300_000.0 + 10_000.0 * 0.27,
        TOLERANCE,
    );
}

#[test]
fn lumpsum_replaces_the_whole_formula() {
    let mut route = fixture_route();
    route.cargo.lumpsum = true;
    route.adjustments.dollars_per_grt = Some(3.0);
    route.adjustments.ws_fixed_differential = Some(1.0);

    let observation = MarketObservation::new(date(2021, 10, 6))
        .with_flat_rate(99.0)
        .with_world_scale(2_150_000.0);
    assert_eq!(gross_freight(&route, &observation).unwrap(), 2_150_000.0);

    route.cargo.cargo_quantity_mt = 1.0;
    route.cargo.grt = 1.0;
    let no_flat_rate = MarketObservation::new(date(2021, 10, 6)).with_world_scale(2_150_000.0);
    assert_eq!(gross_freight(&route, &no_flat_rate).unwrap(), 2_150_000.0);
}

#[test]
fn lumpsum_still_requires_world_scale() {
    let mut route = fixture_route();
    route.cargo.lumpsum = true;
    let observation = MarketObservation::new(date(2021, 10, 6)).with_flat_rate(10.0);
    let err = gross_freight(&route, &observation).unwrap_err();
    assert!(matches!(err, Error::MissingField { field: "WorldScale", .. }));
}

#[test]
fn world_scale_portion_is_linear() {
    let mut route = fixture_route();
    route.adjustments.dollars_per_grt = Some(1.5);
    let fixed = 5_000.0 * 1.5;

    let base = fixture_observation();
    let scaled = fixture_observation().with_world_scale(150.0 * 1.7);

    let base_gross = gross_freight(&route, &base).unwrap();
    let scaled_gross = gross_freight(&route, &scaled).unwrap();

    assert_close(scaled_gross - fixed, (base_gross - fixed) * 1.7, 1e-6);
    assert_close(
        freight_usd_mt(&scaled).unwrap(),
        freight_usd_mt(&base).unwrap() * 1.7,
        1e-9,
    );
}
