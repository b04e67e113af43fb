//! Route constants: canonical codes, the per-route constants model, and the store.
//!
//! - [`code`] - Route-code normalization applied at every lookup boundary
//! - [`constants`] - Cargo, port, sailing and consumption terms of one route
//! - [`store`] - Immutable route-keyed table and the bundled default table

pub mod code;
pub mod constants;
pub mod store;

pub use code::{normalize_route_code, ROUTE_CODE_SEPARATOR};
pub use constants::{
    CargoTerms, ConsumptionRates, FuelGrade, PortActivity, PortActivityKind, PortTerms,
    RateAdjustments, RouteConstants, SailingTerms,
};
pub use store::{get_route_constants, RouteConstantsStore};
