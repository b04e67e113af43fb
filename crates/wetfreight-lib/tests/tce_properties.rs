mod common;

use common::{
    assert_close, benchmark_observation, builtin_store, date, fixture_observation,
    fixture_route, fixture_store, TOLERANCE,
};
use wetfreight_lib::{
    calc, decompose, read_observations_csv, BunkerFormula, Error, MarketObservation,
    TceCalculator, TceConfig, VoyageDecomposition,
};

fn observations() -> Vec<MarketObservation> {
    vec![
        benchmark_observation(date(2021, 10, 6)),
        MarketObservation::new(date(2022, 3, 1))
            .with_flat_rate(18.5)
            .with_world_scale(240.0)
            .with_bunkers(1_250.0, 980.0, 610.0),
        MarketObservation::new(date(2023, 7, 14))
            .with_freight_usd_mt(31.75)
            .with_world_scale(150.0)
            .with_bunkers(810.0, 605.5, 455.0),
    ]
}

#[test]
fn fixture_route_rolls_up_by_hand() {
    let store = fixture_store(vec![fixture_route()]);
    let rows = calc(&store, "TEST_ROUTE", &[fixture_observation()]).expect("calc succeeds");
    let row = &rows[0];

    assert_close(row.freight_usd_mt.unwrap(), 30.0, TOLERANCE);
    assert_close(row.gross_freight, 300_000.0, TOLERANCE);
    // 438 mt × 500 + 70 mt × 700, no premium.
    assert_close(row.bunker_cost, 268_000.0, TOLERANCE);
    assert_close(row.net_freight, 292_500.0, TOLERANCE);
    assert_close(row.total_expenses, 298_000.0, TOLERANCE);
    assert_close(row.net_income, -5_500.0, TOLERANCE);
    assert_close(row.tce, -5_500.0 / 25.5, TOLERANCE);
    assert_close(row.total_voyage_days, 25.5, TOLERANCE);
    assert_close(row.ifo_non_eca_mt, 438.0, TOLERANCE);
    assert_close(row.lsmgo_eca_mt, 70.0, TOLERANCE);
}

#[test]
fn tce_identity_holds_for_every_bundled_route() {
    let store = builtin_store();
    for route in store.routes_sorted() {
        let rows = calc(&store, &route.code, &observations()).expect("calc succeeds");
        for row in rows {
            let net_freight = row.gross_freight * (100.0 - route.cargo.commission_percent) / 100.0;
            let expenses = row.bunker_cost + route.port_charges();
            let expected = (net_freight - expenses) / row.total_voyage_days;
            assert_close(row.tce, expected, TOLERANCE);
        }
    }
}

#[test]
fn voyage_totals_do_not_depend_on_market_inputs() {
    let store = builtin_store();
    let rows = calc(&store, "TC14", &observations()).expect("calc succeeds");
    let voyage = decompose(store.lookup("TC14").unwrap());

    for row in &rows {
        assert_eq!(row.total_voyage_days, voyage.total_voyage_days);
        assert_eq!(row.ifo_non_eca_mt, voyage.ifo_non_eca_mt);
        assert_eq!(row.lsmgo_eca_mt, voyage.lsmgo_eca_mt);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let store = builtin_store();
    let first = calc(&store, "TD25", &observations()).unwrap();
    let second = calc(&store, "td25", &observations()).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.tce.to_bits(), b.tce.to_bits());
        assert_eq!(a.bunker_cost.to_bits(), b.bunker_cost.to_bits());
        assert_eq!(a, b);
    }
}

#[test]
fn rows_keep_input_order_and_timestamps() {
    let store = builtin_store();
    let input = observations();
    let rows = calc(&store, "TC6", &input).unwrap();
    let stamps: Vec<_> = rows.iter().map(|row| row.timestamp).collect();
    let expected: Vec<_> = input.iter().map(|obs| obs.timestamp).collect();
    assert_eq!(stamps, expected);
}

#[test]
fn unknown_route_suggests_close_codes() {
    let store = builtin_store();
    let err = calc(&store, "TD3C", &observations()).unwrap_err();
    match &err {
        Error::UnknownRoute { code, suggestions } => {
            assert_eq!(code, "TD3C");
            assert_eq!(suggestions.first().map(String::as_str), Some("TD3_C"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("Did you mean"));
}

#[test]
fn missing_market_field_aborts_the_batch() {
    let store = builtin_store();
    let mut input = observations();
    input[1].mgo = None;

    let err = calc(&store, "TC2_37", &input).unwrap_err();
    match err {
        Error::MissingField { timestamp, field } => {
            assert_eq!(timestamp, date(2022, 3, 1));
            assert_eq!(field, "MGO");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn hsfo_is_never_required() {
    let store = builtin_store();
    let mut observation = benchmark_observation(date(2021, 10, 6));
    observation.hsfo = None;
    assert!(calc(&store, "TC6", &[observation]).is_ok());
}

#[test]
fn zero_voyage_days_is_an_error_not_nan() {
    let mut route = fixture_route();
    route.port.days_loading = 0.0;
    route.port.days_discharging = 0.0;
    route.port.days_waiting = 0.0;
    route.port.days_canal = 0.0;
    route.sailing.ballast_miles_eca = 0.0;
    route.sailing.ballast_miles_non_eca = 0.0;
    route.sailing.laden_miles_eca = 0.0;
    route.sailing.laden_miles_non_eca = 0.0;
    let store = fixture_store(vec![route]);

    let err = calc(&store, "test_route", &[fixture_observation()]).unwrap_err();
    assert!(matches!(err, Error::DivisionByZero { ref code } if code == "TEST_ROUTE"));
}

#[test]
fn pre_2020_observations_are_rejected() {
    let store = builtin_store();
    let err = calc(&store, "TC6", &[benchmark_observation(date(2018, 5, 2))]).unwrap_err();
    match err {
        Error::UnsupportedFuelRegime { regime, date: when } => {
            assert_eq!(regime, "pre-2020 IMO");
            assert_eq!(when, date(2018, 5, 2));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn china_eca_formula_adds_premium_on_both_totals() {
    let store = fixture_store(vec![fixture_route()]);
    let default_rows = TceCalculator::new(&store)
        .calc("test route", &[fixture_observation()])
        .unwrap();
    let china_rows = TceCalculator::with_config(
        &store,
        TceConfig {
            bunker_formula: BunkerFormula::ChinaEca,
            bunker_premium: 5.0,
        },
    )
    .calc("test route", &[fixture_observation()])
    .unwrap();

    assert_close(
        china_rows[0].bunker_cost - default_rows[0].bunker_cost,
        5.0 * (438.0 + 70.0),
        TOLERANCE,
    );
}

#[test]
fn non_eca_formula_prices_only_ifo() {
    let store = fixture_store(vec![fixture_route()]);
    let config = TceConfig {
        bunker_formula: BunkerFormula::NonEca,
        ..TceConfig::default()
    };
    let mut observation = fixture_observation();
    observation.mgo = None;

    let rows = TceCalculator::with_config(&store, config)
        .calc("TEST_ROUTE", &[observation])
        .expect("MGO is not needed");
    assert_close(rows[0].bunker_cost, 438.0 * 505.0, TOLERANCE);
}

#[test]
fn lumpsum_route_still_reports_derived_freight() {
    let store = builtin_store();
    let rows = calc(&store, "TD22", &[benchmark_observation(date(2021, 10, 6))]).unwrap();
    assert_close(rows[0].freight_usd_mt.unwrap(), 20.46 * 1.0314, TOLERANCE);

    let lumpsum_only = MarketObservation::new(date(2021, 10, 6))
        .with_world_scale(4_000_000.0)
        .with_bunkers(300.0, 300.0, 300.0);
    let rows = calc(&store, "TD22", &[lumpsum_only]).unwrap();
    assert_eq!(rows[0].freight_usd_mt, None);
    assert_eq!(rows[0].gross_freight, 4_000_000.0);
}

#[test]
fn report_bundles_route_context() {
    let store = builtin_store();
    let report = TceCalculator::new(&store)
        .report("tc2 37", &observations())
        .unwrap();
    assert_eq!(report.route, "TC2_37");
    assert_eq!(report.description.as_deref(), Some("Rotterdam to New York"));
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.formula, BunkerFormula::EcaHistory);
}

#[test]
fn non_finite_csv_cells_are_rejected_on_read() {
    let csv = "Date,FlatRate,WorldScale,MGO,VLSFO,HSFO\n2021-10-06,20.46,NaN,300,inf,300\n";
    let err = read_observations_csv(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::ObservationParse { row: 2, .. }));
}

fn invalid_field(observation: MarketObservation) -> &'static str {
    let store = builtin_store();
    match calc(&store, "tc6", &[observation]) {
        Err(Error::InvalidField { field, .. }) => field,
        other => panic!("expected InvalidField, got {:?}", other),
    }
}

#[test]
fn non_finite_market_inputs_fail_instead_of_yielding_nan() {
    let base = || benchmark_observation(date(2021, 10, 6));

    let nan_world_scale = base().with_world_scale(f64::NAN);
    assert_eq!(invalid_field(nan_world_scale), "WorldScale");

    let infinite_flat_rate = base().with_flat_rate(f64::INFINITY);
    assert_eq!(invalid_field(infinite_flat_rate), "FlatRate");

    let nan_freight = base().with_freight_usd_mt(f64::NAN);
    assert_eq!(invalid_field(nan_freight), "Freight_USDMT");

    let infinite_vlsfo = base().with_bunkers(300.0, f64::INFINITY, 300.0);
    assert_eq!(invalid_field(infinite_vlsfo), "VLSFO");

    let nan_mgo = base().with_bunkers(f64::NAN, 300.0, 300.0);
    assert_eq!(invalid_field(nan_mgo), "MGO");
}

#[test]
fn non_finite_premium_is_rejected() {
    let store = fixture_store(vec![fixture_route()]);
    let config = TceConfig {
        bunker_formula: BunkerFormula::NonEca,
        bunker_premium: f64::NAN,
    };
    let err = TceCalculator::with_config(&store, config)
        .calc("TEST_ROUTE", &[fixture_observation()])
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPremium { .. }));
}

#[test]
fn calc_row_rejects_caller_built_zero_day_voyage() {
    let store = fixture_store(vec![fixture_route()]);
    let route = store.lookup("TEST_ROUTE").unwrap();
    let voyage = VoyageDecomposition {
        ifo_non_eca_mt: 438.0,
        lsmgo_eca_mt: 70.0,
        ..VoyageDecomposition::default()
    };

    let err = TceCalculator::new(&store)
        .calc_row(route, &voyage, &fixture_observation())
        .unwrap_err();
    assert!(matches!(err, Error::DivisionByZero { ref code } if code == "TEST_ROUTE"));
}

#[test]
fn report_rows_match_calc() {
    let store = builtin_store();
    let calculator = TceCalculator::new(&store);
    let rows = calculator.calc("TD7", &observations()).unwrap();
    let report = calculator.report("TD7", &observations()).unwrap();
    assert_eq!(report.rows, rows);
}
