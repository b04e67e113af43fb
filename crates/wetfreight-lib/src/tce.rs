//! Time Charter Equivalent roll-up.
//!
//! For each observation the calculator prices gross freight, bunker cost and
//! port charges against a route's constants, then divides net income by the
//! route's total voyage days. Route constants and their
//! [`VoyageDecomposition`] are resolved once per call and shared by every row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::freight::{freight_usd_mt, gross_freight};
use crate::fuel::{BunkerFormula, DEFAULT_BUNKER_PREMIUM};
use crate::market::MarketObservation;
use crate::output::TceReport;
use crate::route::{RouteConstants, RouteConstantsStore};
use crate::voyage::{decompose, VoyageDecomposition};

/// Calculator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TceConfig {
    /// Formula used to price bunkers.
    pub bunker_formula: BunkerFormula,
    /// Handling premium in $/mt for the formulas that apply one.
    pub bunker_premium: f64,
}

impl Default for TceConfig {
    fn default() -> Self {
        Self {
            bunker_formula: BunkerFormula::default(),
            bunker_premium: DEFAULT_BUNKER_PREMIUM,
        }
    }
}

/// Income and cost roll-up for one route and observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    #[serde(rename = "Date")]
    pub timestamp: NaiveDate,
    /// Freight in $/mt; absent on lumpsum routes quoted without a flat rate.
    #[serde(rename = "Freight_USDMT")]
    pub freight_usd_mt: Option<f64>,
    #[serde(rename = "GrossFreight")]
    pub gross_freight: f64,
    #[serde(rename = "BunkerCost")]
    pub bunker_cost: f64,
    #[serde(rename = "NetFreight")]
    pub net_freight: f64,
    #[serde(rename = "TotalExpenses")]
    pub total_expenses: f64,
    #[serde(rename = "NetIncome")]
    pub net_income: f64,
    /// Daily earnings in $/day.
    #[serde(rename = "TCE")]
    pub tce: f64,
    #[serde(rename = "Total voyage days")]
    pub total_voyage_days: f64,
    #[serde(rename = "Total IFO Non ECA Cons")]
    pub ifo_non_eca_mt: f64,
    #[serde(rename = "Total LSMGO ECA Cons")]
    pub lsmgo_eca_mt: f64,
}

/// TCE calculator bound to a route constants store.
#[derive(Debug, Clone, Copy)]
pub struct TceCalculator<'a> {
    store: &'a RouteConstantsStore,
    config: TceConfig,
}

impl<'a> TceCalculator<'a> {
    /// Calculator using the default configuration.
    pub fn new(store: &'a RouteConstantsStore) -> Self {
        Self::with_config(store, TceConfig::default())
    }

    pub fn with_config(store: &'a RouteConstantsStore, config: TceConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &TceConfig {
        &self.config
    }

    /// Look up and decompose a route, rejecting zero total voyage days.
    pub fn prepare(&self, route_code: &str) -> Result<(&'a RouteConstants, VoyageDecomposition)> {
        if !self.config.bunker_premium.is_finite() {
            return Err(Error::InvalidPremium {
                premium: self.config.bunker_premium,
            });
        }

        let route = self.store.lookup(route_code)?;
        let voyage = decompose(route);
        ensure_voyage_days(route, &voyage)?;

        Ok((route, voyage))
    }

    /// Compute one result per observation, in input order.
    ///
    /// The first failing row aborts the batch; no partial results are returned.
    pub fn calc(
        &self,
        route_code: &str,
        observations: &[MarketObservation],
    ) -> Result<Vec<CalculationResult>> {
        let (route, voyage) = self.prepare(route_code)?;
        self.calc_rows(route, &voyage, observations)
    }

    /// Same rows as [`TceCalculator::calc`], bundled with their route context.
    pub fn report(
        &self,
        route_code: &str,
        observations: &[MarketObservation],
    ) -> Result<TceReport> {
        let (route, voyage) = self.prepare(route_code)?;
        let rows = self.calc_rows(route, &voyage, observations)?;

        Ok(TceReport {
            route: route.code.clone(),
            description: route.description.clone(),
            formula: self.config.bunker_formula,
            voyage,
            rows,
        })
    }

    fn calc_rows(
        &self,
        route: &RouteConstants,
        voyage: &VoyageDecomposition,
        observations: &[MarketObservation],
    ) -> Result<Vec<CalculationResult>> {
        debug!(
            route = %route.code,
            rows = observations.len(),
            formula = %self.config.bunker_formula,
            "calculating TCE"
        );

        observations
            .iter()
            .map(|observation| self.calc_row(route, voyage, observation))
            .collect()
    }

    /// Price a single observation against prepared route data.
    pub fn calc_row(
        &self,
        route: &RouteConstants,
        voyage: &VoyageDecomposition,
        observation: &MarketObservation,
    ) -> Result<CalculationResult> {
        ensure_voyage_days(route, voyage)?;

        let freight_usd_mt = if route.cargo.lumpsum {
            freight_usd_mt(observation).ok()
        } else {
            Some(freight_usd_mt(observation)?)
        };

        let gross_freight = gross_freight(route, observation)?;
        let bunker_cost = self.config.bunker_formula.bunker_cost(
            observation,
            voyage,
            self.config.bunker_premium,
        )?;

        let net_freight = gross_freight * ((100.0 - route.cargo.commission_percent) / 100.0);
        let total_expenses = bunker_cost + route.port_charges();
        let net_income = net_freight - total_expenses;
        let tce = net_income / voyage.total_voyage_days;

        trace!(
            route = %route.code,
            date = %observation.timestamp,
            gross_freight,
            bunker_cost,
            tce,
            "priced observation"
        );

        Ok(CalculationResult {
            timestamp: observation.timestamp,
            freight_usd_mt,
            gross_freight,
            bunker_cost,
            net_freight,
            total_expenses,
            net_income,
            tce,
            total_voyage_days: voyage.total_voyage_days,
            ifo_non_eca_mt: voyage.ifo_non_eca_mt,
            lsmgo_eca_mt: voyage.lsmgo_eca_mt,
        })
    }
}

fn ensure_voyage_days(route: &RouteConstants, voyage: &VoyageDecomposition) -> Result<()> {
    if voyage.total_voyage_days.is_finite() && voyage.total_voyage_days > 0.0 {
        Ok(())
    } else {
        Err(Error::DivisionByZero {
            code: route.code.clone(),
        })
    }
}

/// Compute TCE rows for `route_code` with the default configuration.
pub fn calc(
    store: &RouteConstantsStore,
    route_code: &str,
    observations: &[MarketObservation],
) -> Result<Vec<CalculationResult>> {
    TceCalculator::new(store).calc(route_code, observations)
}
