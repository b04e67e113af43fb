//! Voyage-day and fuel-consumption decomposition.
//!
//! A route's sea time is split into ballast and laden legs, each further split
//! into the mileage sailed inside and outside Emission Control Areas. Fuel
//! burned outside ECAs is IFO (priced as VLSFO); fuel burned inside is LSMGO.
//! The decomposition depends on [`RouteConstants`] alone, so it is computed
//! once per route and reused for every market observation.
//!
//! Canal transit is charged to the non-ECA totals only: canal days are added
//! to both non-ECA sea legs for consumption, never to the ECA legs.

use serde::Serialize;
use tracing::debug;

use crate::route::{FuelGrade, RouteConstants};

/// Hours in a sailing day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days and fuel for one route, independent of market prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VoyageDecomposition {
    pub ballast_non_eca_days: f64,
    pub laden_non_eca_days: f64,
    pub ballast_eca_days: f64,
    pub laden_eca_days: f64,
    /// Total IFO burned outside ECAs, in metric tons.
    #[serde(rename = "Total IFO Non ECA Cons")]
    pub ifo_non_eca_mt: f64,
    /// Total LSMGO burned inside ECAs, in metric tons.
    #[serde(rename = "Total LSMGO ECA Cons")]
    pub lsmgo_eca_mt: f64,
    #[serde(rename = "Total voyage days")]
    pub total_voyage_days: f64,
}

impl VoyageDecomposition {
    /// Sea days across all four legs.
    pub fn sea_days(&self) -> f64 {
        self.ballast_non_eca_days
            + self.laden_non_eca_days
            + self.ballast_eca_days
            + self.laden_eca_days
    }
}

/// Days needed to sail `miles` at `knots`, slowed by `weather_factor`.
pub fn sailing_days(miles: f64, knots: f64, weather_factor: f64) -> f64 {
    miles * (1.0 + weather_factor) / (knots * HOURS_PER_DAY)
}

/// Split a route into ECA and non-ECA legs and total its fuel and days.
pub fn decompose(route: &RouteConstants) -> VoyageDecomposition {
    let sailing = &route.sailing;
    let port = &route.port;
    let rates = &route.consumption;
    let weather = sailing.weather_factor;
    let (ballast_knots, laden_knots) = (sailing.knots_ballast, sailing.knots_laden);

    let ballast_non_eca_days = sailing_days(sailing.ballast_miles_non_eca, ballast_knots, weather);
    let laden_non_eca_days = sailing_days(sailing.laden_miles_non_eca, laden_knots, weather);
    let ballast_eca_days = sailing_days(sailing.ballast_miles_eca, ballast_knots, weather);
    let laden_eca_days = sailing_days(sailing.laden_miles_eca, laden_knots, weather);

    let activities = route.port_activities();
    let port_burn = |grade: FuelGrade| -> f64 {
        activities
            .iter()
            .map(|activity| activity.consumption_on(grade))
            .sum()
    };

    let ifo_non_eca_mt = (ballast_non_eca_days + port.days_canal) * rates.ifo_ballast
        + (laden_non_eca_days + port.days_canal) * rates.ifo_laden
        + port_burn(FuelGrade::Ifo);

    let lsmgo_eca_mt = ballast_eca_days * rates.ifo_ballast
        + laden_eca_days * rates.ifo_laden
        + port_burn(FuelGrade::Lsmgo);

    let total_voyage_days = ballast_non_eca_days
        + laden_non_eca_days
        + ballast_eca_days
        + laden_eca_days
        + port.days_loading
        + port.days_discharging
        + port.days_waiting
        + port.days_canal;

    debug!(
        route = %route.code,
        total_voyage_days,
        ifo_non_eca_mt,
        lsmgo_eca_mt,
        "decomposed voyage"
    );

    VoyageDecomposition {
        ballast_non_eca_days,
        laden_non_eca_days,
        ballast_eca_days,
        laden_eca_days,
        ifo_non_eca_mt,
        lsmgo_eca_mt,
        total_voyage_days,
    }
}
