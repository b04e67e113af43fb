//! Wet freight library entry points.
//!
//! This crate computes Time Charter Equivalent (TCE) earnings for tanker
//! voyages on benchmark routes. It exposes the route constants store, the
//! voyage decomposition, the freight and bunker formulas, and the TCE
//! roll-up. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!
//! ```
//! use chrono::NaiveDate;
//! use wetfreight_lib::{calc, MarketObservation, RouteConstantsStore};
//!
//! let store = RouteConstantsStore::builtin().unwrap();
//! let observation = MarketObservation::new(NaiveDate::from_ymd_opt(2021, 10, 6).unwrap())
//!     .with_flat_rate(20.46)
//!     .with_world_scale(103.14)
//!     .with_bunkers(300.0, 300.0, 300.0);
//!
//! let rows = calc(&store, "tc6", &[observation]).unwrap();
//! assert!((rows[0].gross_freight - 633_073.32).abs() < 0.1);
//! ```

#![deny(warnings)]

pub mod error;
pub mod freight;
pub mod fuel;
pub mod market;
pub mod output;
pub mod route;
pub mod tce;
pub mod voyage;

pub use error::{Error, Result};
pub use freight::{freight_usd_mt, gross_freight};
pub use fuel::{
    effective_price, BunkerFormula, FuelKind, FuelRegimePolicy, DEFAULT_BUNKER_PREMIUM,
};
pub use market::{read_observations_csv, MarketObservation};
pub use output::{ReportFormat, TceReport};
pub use route::{
    get_route_constants, normalize_route_code, FuelGrade, RouteConstants, RouteConstantsStore,
};
pub use tce::{calc, CalculationResult, TceCalculator, TceConfig};
pub use voyage::{decompose, sailing_days, VoyageDecomposition};
