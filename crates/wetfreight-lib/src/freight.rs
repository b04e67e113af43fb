//! Gross freight from World Scale or lumpsum inputs plus route adders.

use crate::error::Result;
use crate::market::MarketObservation;
use crate::route::RouteConstants;

/// Freight in $/mt: the observation's pre-computed value when present,
/// otherwise `flat_rate × world_scale / 100`.
pub fn freight_usd_mt(observation: &MarketObservation) -> Result<f64> {
    if observation.freight_usd_mt.is_some() {
        return observation.require(observation.freight_usd_mt, "Freight_USDMT");
    }
    let flat_rate = observation.require(observation.flat_rate, "FlatRate")?;
    let world_scale = observation.require(observation.world_scale, "WorldScale")?;
    Ok(flat_rate * (world_scale / 100.0))
}

/// Gross freight revenue for one route and observation, in dollars.
///
/// Cargo quantity × freight, plus `GRT × $/GRT` and `cargo × WS fixed
/// differential` when those adders are configured. On lumpsum routes the
/// whole amount is replaced by the observation's World Scale field, which
/// then carries the agreed dollar lumpsum.
pub fn gross_freight(route: &RouteConstants, observation: &MarketObservation) -> Result<f64> {
    if route.cargo.lumpsum {
        return observation.require(observation.world_scale, "WorldScale");
    }

    let cargo = route.cargo.cargo_quantity_mt;
    let mut gross = cargo * freight_usd_mt(observation)?;

    if let Some(per_grt) = route.adjustments.dollars_per_grt {
        gross += route.cargo.grt * per_grt;
    }
    if let Some(differential) = route.adjustments.ws_fixed_differential {
        gross += cargo * differential;
    }

    Ok(gross)
}
