#![allow(dead_code)]

use chrono::NaiveDate;

use wetfreight_lib::route::{
    CargoTerms, ConsumptionRates, FuelGrade, PortTerms, RateAdjustments, RouteConstants,
    SailingTerms,
};
use wetfreight_lib::{MarketObservation, RouteConstantsStore};

pub const TOLERANCE: f64 = 1e-6;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Route with round numbers: 25.5 voyage days, 438 mt IFO outside ECAs and
/// 70 mt LSMGO inside.
pub fn fixture_route() -> RouteConstants {
    RouteConstants {
        code: "test route".to_string(),
        description: Some("Fixture route".to_string()),
        cargo: CargoTerms {
            cargo_quantity_mt: 10_000.0,
            grt: 5_000.0,
            commission_percent: 2.5,
            lumpsum: false,
        },
        adjustments: RateAdjustments::default(),
        port: PortTerms {
            days_loading: 2.0,
            days_discharging: 1.0,
            days_waiting: 1.0,
            days_canal: 0.5,
            loading_fuel: FuelGrade::Ifo,
            discharge_fuel: FuelGrade::Lsmgo,
            waiting_fuel: FuelGrade::Ifo,
            charges_load_port: 10_000.0,
            charges_discharge_port: 20_000.0,
        },
        sailing: SailingTerms {
            ballast_miles_eca: 240.0,
            ballast_miles_non_eca: 2_400.0,
            laden_miles_eca: 480.0,
            laden_miles_non_eca: 2_400.0,
            knots_ballast: 10.0,
            knots_laden: 12.0,
            weather_factor: 0.0,
        },
        consumption: ConsumptionRates {
            ifo_anchor: 4.0,
            ifo_port_loading: 6.0,
            ifo_port_discharging: 10.0,
            ifo_ballast: 20.0,
            ifo_laden: 24.0,
        },
    }
}

pub fn fixture_store(routes: Vec<RouteConstants>) -> RouteConstantsStore {
    RouteConstantsStore::from_routes(routes).expect("fixture routes are valid")
}

/// 2021 observation: 30 $/mt freight, VLSFO 500, MGO 700.
pub fn fixture_observation() -> MarketObservation {
    MarketObservation::new(date(2021, 10, 6))
        .with_flat_rate(20.0)
        .with_world_scale(150.0)
        .with_bunkers(700.0, 500.0, 450.0)
}

pub fn builtin_store() -> RouteConstantsStore {
    RouteConstantsStore::builtin().expect("bundled route constants load")
}

/// Observation used by most regression fixtures.
pub fn benchmark_observation(ds: NaiveDate) -> MarketObservation {
    MarketObservation::new(ds)
        .with_flat_rate(20.46)
        .with_world_scale(103.14)
        .with_bunkers(300.0, 300.0, 300.0)
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
