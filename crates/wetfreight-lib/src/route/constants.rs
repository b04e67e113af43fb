//! Per-route physical and contractual constants.
//!
//! One [`RouteConstants`] entry describes a benchmark voyage: cargo terms,
//! freight adders, port time and charges, the ECA/non-ECA mileage split,
//! speeds and fuel burn rates. Entries are immutable once loaded into a
//! [`RouteConstantsStore`](super::RouteConstantsStore).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Fuel grade burned during a port activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelGrade {
    #[serde(rename = "IFO")]
    Ifo,
    #[serde(rename = "LSMGO")]
    Lsmgo,
    /// Any label other than `IFO` or `LSMGO`. Such an activity burns no
    /// fuel in either consumption total.
    #[serde(other)]
    Unrecognized,
}

/// Cargo and contract terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoTerms {
    /// Cargo quantity in metric tons.
    pub cargo_quantity_mt: f64,
    /// Gross registered tonnage of the benchmark vessel.
    pub grt: f64,
    /// Address and brokerage commission, in percent.
    pub commission_percent: f64,
    /// Lumpsum fixture: gross freight is the quoted amount, not rate × quantity.
    #[serde(deserialize_with = "deserialize_lumpsum")]
    pub lumpsum: bool,
}

/// Optional freight adders. `None` means the adder does not apply; `Some(0.0)`
/// applies a zero-valued adder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateAdjustments {
    /// Dollars per GRT added to gross freight.
    #[serde(default)]
    pub dollars_per_grt: Option<f64>,
    /// World Scale fixed differential in $/mt of cargo.
    #[serde(default)]
    pub ws_fixed_differential: Option<f64>,
}

/// Port time, port fuel grades and port charges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortTerms {
    pub days_loading: f64,
    pub days_discharging: f64,
    pub days_waiting: f64,
    #[serde(default)]
    pub days_canal: f64,
    pub loading_fuel: FuelGrade,
    pub discharge_fuel: FuelGrade,
    pub waiting_fuel: FuelGrade,
    /// Flat charges at the load port, in dollars.
    pub charges_load_port: f64,
    /// Flat charges at the discharge port, in dollars.
    pub charges_discharge_port: f64,
}

/// Distances and speeds for the ballast and laden legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SailingTerms {
    #[serde(default)]
    pub ballast_miles_eca: f64,
    pub ballast_miles_non_eca: f64,
    #[serde(default)]
    pub laden_miles_eca: f64,
    pub laden_miles_non_eca: f64,
    pub knots_ballast: f64,
    pub knots_laden: f64,
    /// Fractional speed loss applied to every sea leg (0.05 = 5% slower).
    pub weather_factor: f64,
}

/// Fuel burn rates in metric tons per day. The same rates apply whether the
/// vessel is burning IFO outside an ECA or LSMGO inside one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRates {
    pub ifo_anchor: f64,
    pub ifo_port_loading: f64,
    pub ifo_port_discharging: f64,
    pub ifo_ballast: f64,
    pub ifo_laden: f64,
}

/// Port activity that may burn fuel while the vessel is not sailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortActivityKind {
    Loading,
    Discharging,
    Waiting,
}

impl PortActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            PortActivityKind::Loading => "loading",
            PortActivityKind::Discharging => "discharging",
            PortActivityKind::Waiting => "waiting",
        }
    }
}

/// Days, fuel grade and burn rate of one port activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortActivity {
    pub kind: PortActivityKind,
    pub grade: FuelGrade,
    pub days: f64,
    pub burn_rate: f64,
}

impl PortActivity {
    /// Fuel burned by this activity if it runs on `grade`, zero otherwise.
    pub fn consumption_on(&self, grade: FuelGrade) -> f64 {
        if self.grade == grade {
            self.days * self.burn_rate
        } else {
            0.0
        }
    }
}

/// Complete constants for one benchmark route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConstants {
    /// Canonical route code; populated from the table key when loaded.
    #[serde(skip)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cargo: CargoTerms,
    #[serde(default)]
    pub adjustments: RateAdjustments,
    pub port: PortTerms,
    pub sailing: SailingTerms,
    pub consumption: ConsumptionRates,
}

impl RouteConstants {
    /// Loading, discharging and waiting activities with their burn rates.
    pub fn port_activities(&self) -> [PortActivity; 3] {
        [
            PortActivity {
                kind: PortActivityKind::Loading,
                grade: self.port.loading_fuel,
                days: self.port.days_loading,
                burn_rate: self.consumption.ifo_port_loading,
            },
            PortActivity {
                kind: PortActivityKind::Discharging,
                grade: self.port.discharge_fuel,
                days: self.port.days_discharging,
                burn_rate: self.consumption.ifo_port_discharging,
            },
            PortActivity {
                kind: PortActivityKind::Waiting,
                grade: self.port.waiting_fuel,
                days: self.port.days_waiting,
                burn_rate: self.consumption.ifo_anchor,
            },
        ]
    }

    /// Sum of both port charges.
    pub fn port_charges(&self) -> f64 {
        self.port.charges_load_port + self.port.charges_discharge_port
    }

    /// Port activities whose fuel grade is neither IFO nor LSMGO.
    pub fn unrecognized_port_activities(&self) -> Vec<PortActivityKind> {
        self.port_activities()
            .iter()
            .filter(|activity| activity.grade == FuelGrade::Unrecognized)
            .map(|activity| activity.kind)
            .collect()
    }

    /// True when any port activity names a fuel grade other than IFO or LSMGO.
    pub fn has_unrecognized_port_fuel(&self) -> bool {
        !self.unrecognized_port_activities().is_empty()
    }

    /// Validate route constants for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(self.invalid("route code must not be empty".to_string()));
        }

        let cargo = &self.cargo;
        self.check_non_negative(
            "cargo",
            &[
                ("cargo_quantity_mt", cargo.cargo_quantity_mt),
                ("grt", cargo.grt),
            ],
        )?;

        let port = &self.port;
        self.check_non_negative(
            "port",
            &[
                ("days_loading", port.days_loading),
                ("days_discharging", port.days_discharging),
                ("days_waiting", port.days_waiting),
                ("days_canal", port.days_canal),
                ("charges_load_port", port.charges_load_port),
                ("charges_discharge_port", port.charges_discharge_port),
            ],
        )?;

        let sailing = &self.sailing;
        self.check_non_negative(
            "sailing",
            &[
                ("ballast_miles_eca", sailing.ballast_miles_eca),
                ("ballast_miles_non_eca", sailing.ballast_miles_non_eca),
                ("laden_miles_eca", sailing.laden_miles_eca),
                ("laden_miles_non_eca", sailing.laden_miles_non_eca),
                ("weather_factor", sailing.weather_factor),
            ],
        )?;

        let rates = &self.consumption;
        self.check_non_negative(
            "consumption",
            &[
                ("ifo_anchor", rates.ifo_anchor),
                ("ifo_port_loading", rates.ifo_port_loading),
                ("ifo_port_discharging", rates.ifo_port_discharging),
                ("ifo_ballast", rates.ifo_ballast),
                ("ifo_laden", rates.ifo_laden),
            ],
        )?;

        for (field, knots) in [
            ("knots_ballast", sailing.knots_ballast),
            ("knots_laden", sailing.knots_laden),
        ] {
            if !knots.is_finite() || knots <= 0.0 {
                let message = format!("sailing.{field} must be a finite positive number");
                return Err(self.invalid(message));
            }
        }

        let commission = cargo.commission_percent;
        if !commission.is_finite() || !(0.0..=100.0).contains(&commission) {
            let message = format!("cargo.commission_percent must be in 0..=100, got {commission}");
            return Err(self.invalid(message));
        }

        let adders = &self.adjustments;
        for (field, adder) in [
            ("dollars_per_grt", adders.dollars_per_grt),
            ("ws_fixed_differential", adders.ws_fixed_differential),
        ] {
            if adder.is_some_and(|value| !value.is_finite()) {
                let message = format!("adjustments.{field} must be finite when present");
                return Err(self.invalid(message));
            }
        }

        Ok(())
    }

    fn check_non_negative(&self, section: &str, fields: &[(&str, f64)]) -> Result<()> {
        for &(field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                let message = format!("{section}.{field} must be finite and non-negative");
                return Err(self.invalid(message));
            }
        }
        Ok(())
    }

    fn invalid(&self, message: String) -> Error {
        Error::RouteDataValidation {
            code: self.code.clone(),
            message,
        }
    }
}

/// Accepts either a JSON boolean or the calculator sheet's `"YES"`/`"NO"`.
fn deserialize_lumpsum<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => Ok(flag),
        Flag::Text(text) => match text.trim().to_ascii_uppercase().as_str() {
            "YES" => Ok(true),
            "NO" | "" => Ok(false),
            other => Err(D::Error::custom(format!("lumpsum must be YES or NO, got {other}"))),
        },
    }
}
