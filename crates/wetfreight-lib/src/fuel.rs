//! Bunker pricing, fuel regimes and bunker cost formulas.
//!
//! Prices come from a [`MarketObservation`]; quantities come from a
//! [`VoyageDecomposition`]. Only the post-2020 regime (VLSFO outside ECAs,
//! LSMGO inside) is priced.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::market::MarketObservation;
use crate::voyage::VoyageDecomposition;

/// Bunkering handling premium in $/mt added to consumption-side prices.
pub const DEFAULT_BUNKER_PREMIUM: f64 = 5.0;

/// Bunker fuel quoted in a market observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelKind {
    Mgo,
    Vlsfo,
    /// Carried for older regimes; never priced by the post-2020 formulas.
    Hsfo,
}

impl FuelKind {
    /// Column name of this fuel in observation input.
    pub fn field_name(self) -> &'static str {
        match self {
            FuelKind::Mgo => "MGO",
            FuelKind::Vlsfo => "VLSFO",
            FuelKind::Hsfo => "HSFO",
        }
    }
}

/// Spot price of `fuel` plus `premium`, in $/mt.
pub fn effective_price(
    observation: &MarketObservation,
    fuel: FuelKind,
    premium: f64,
) -> Result<f64> {
    let spot = match fuel {
        FuelKind::Mgo => observation.mgo,
        FuelKind::Vlsfo => observation.vlsfo,
        FuelKind::Hsfo => observation.hsfo,
    };
    Ok(observation.require(spot, fuel.field_name())? + premium)
}

/// Sulphur regime in force at an observation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelRegimePolicy {
    /// IMO 2020 global cap: VLSFO outside ECAs, LSMGO inside.
    Post2020,
    /// Before IMO 2020 with the 0.1% ECA limit: HSFO outside ECAs, MGO inside.
    Pre2020Imo,
    /// 2019 China domestic ECA rules.
    Pre2019ChinaEca,
    /// Before the 1% ECA limit of 2010-07-06: HSFO everywhere.
    Pre2010Eca,
}

impl FuelRegimePolicy {
    /// Regime in force on `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let eca_one_percent = NaiveDate::from_ymd_opt(2010, 7, 6).unwrap_or(NaiveDate::MIN);
        match date.year() {
            year if year >= 2020 => FuelRegimePolicy::Post2020,
            2019 => FuelRegimePolicy::Pre2019ChinaEca,
            _ if date >= eca_one_percent => FuelRegimePolicy::Pre2020Imo,
            _ => FuelRegimePolicy::Pre2010Eca,
        }
    }

    /// Fail with [`Error::UnsupportedFuelRegime`] unless this regime is priced.
    pub fn ensure_supported(self, date: NaiveDate) -> Result<()> {
        match self {
            FuelRegimePolicy::Post2020 => Ok(()),
            other => Err(Error::UnsupportedFuelRegime {
                regime: other.to_string(),
                date,
            }),
        }
    }
}

impl fmt::Display for FuelRegimePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FuelRegimePolicy::Post2020 => "post-2020",
            FuelRegimePolicy::Pre2020Imo => "pre-2020 IMO",
            FuelRegimePolicy::Pre2019ChinaEca => "pre-2019 China ECA",
            FuelRegimePolicy::Pre2010Eca => "pre-2010 ECA",
        };
        f.write_str(label)
    }
}

/// Formula turning consumption totals into a bunker cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BunkerFormula {
    /// Non-ECA IFO × VLSFO + ECA LSMGO × MGO, priced without premium.
    #[default]
    EcaHistory,
    /// Same quantities as [`BunkerFormula::EcaHistory`], priced with the premium.
    ChinaEca,
    /// Non-ECA IFO × VLSFO only, priced with the premium.
    NonEca,
}

impl BunkerFormula {
    /// Premium this formula applies, given the configured premium.
    pub fn premium(self, configured: f64) -> f64 {
        match self {
            BunkerFormula::EcaHistory => 0.0,
            BunkerFormula::ChinaEca | BunkerFormula::NonEca => configured,
        }
    }

    /// Bunker cost in dollars for one observation.
    pub fn bunker_cost(
        self,
        observation: &MarketObservation,
        voyage: &VoyageDecomposition,
        configured_premium: f64,
    ) -> Result<f64> {
        let date = observation.timestamp;
        FuelRegimePolicy::for_date(date).ensure_supported(date)?;

        let premium = self.premium(configured_premium);
        let vlsfo = effective_price(observation, FuelKind::Vlsfo, premium)?;
        let non_eca = vlsfo * voyage.ifo_non_eca_mt;

        match self {
            BunkerFormula::NonEca => Ok(non_eca),
            BunkerFormula::EcaHistory | BunkerFormula::ChinaEca => {
                let mgo = effective_price(observation, FuelKind::Mgo, premium)?;
                Ok(non_eca + mgo * voyage.lsmgo_eca_mt)
            }
        }
    }
}

impl fmt::Display for BunkerFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BunkerFormula::EcaHistory => "eca-history",
            BunkerFormula::ChinaEca => "china-eca",
            BunkerFormula::NonEca => "non-eca",
        };
        f.write_str(label)
    }
}
