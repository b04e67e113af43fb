//! Market observations: freight rate, World Scale and bunker prices per date.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Date format used for observation timestamps in CSV input.
pub const OBSERVATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Market inputs for one time point.
///
/// Every market field is optional so that a missing input is reported as
/// [`Error::MissingField`] when the row is priced rather than when it is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketObservation {
    #[serde(rename = "Date")]
    pub timestamp: NaiveDate,
    /// World Scale flat rate in $/mt.
    #[serde(rename = "FlatRate", default)]
    pub flat_rate: Option<f64>,
    /// Pre-computed freight in $/mt; takes precedence over flat rate × World Scale.
    #[serde(rename = "Freight_USDMT", default)]
    pub freight_usd_mt: Option<f64>,
    /// World Scale percentage, or the dollar amount on lumpsum routes.
    #[serde(rename = "WorldScale", default)]
    pub world_scale: Option<f64>,
    #[serde(rename = "MGO", default)]
    pub mgo: Option<f64>,
    #[serde(rename = "VLSFO", default)]
    pub vlsfo: Option<f64>,
    #[serde(rename = "HSFO", default)]
    pub hsfo: Option<f64>,
}

impl MarketObservation {
    /// Observation with every market field absent.
    pub fn new(timestamp: NaiveDate) -> Self {
        Self {
            timestamp,
            flat_rate: None,
            freight_usd_mt: None,
            world_scale: None,
            mgo: None,
            vlsfo: None,
            hsfo: None,
        }
    }

    pub fn with_flat_rate(mut self, flat_rate: f64) -> Self {
        self.flat_rate = Some(flat_rate);
        self
    }

    pub fn with_freight_usd_mt(mut self, freight: f64) -> Self {
        self.freight_usd_mt = Some(freight);
        self
    }

    pub fn with_world_scale(mut self, world_scale: f64) -> Self {
        self.world_scale = Some(world_scale);
        self
    }

    /// Set the MGO, VLSFO and HSFO spot prices in $/mt.
    pub fn with_bunkers(mut self, mgo: f64, vlsfo: f64, hsfo: f64) -> Self {
        self.mgo = Some(mgo);
        self.vlsfo = Some(vlsfo);
        self.hsfo = Some(hsfo);
        self
    }

    /// Return a present, finite field.
    ///
    /// Fails with [`Error::MissingField`] when the field is absent and with
    /// [`Error::InvalidField`] when it is NaN or infinite.
    pub(crate) fn require(&self, value: Option<f64>, field: &'static str) -> Result<f64> {
        match value {
            Some(value) if value.is_finite() => Ok(value),
            Some(value) => Err(Error::InvalidField {
                timestamp: self.timestamp,
                field,
                value,
            }),
            None => Err(Error::MissingField {
                timestamp: self.timestamp,
                field,
            }),
        }
    }
}

/// Read observations from CSV.
///
/// The header must contain a `Date` column (`YYYY-MM-DD`); the market
/// columns `FlatRate`, `Freight_USDMT`, `WorldScale`, `MGO`, `VLSFO` and
/// `HSFO` are matched case-insensitively and may be omitted or left blank.
pub fn read_observations_csv<R: Read>(reader: R) -> Result<Vec<MarketObservation>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| Error::ObservationParse {
            row: 1,
            message: format!("failed to read headers: {err}"),
        })?
        .clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    };

    let date_column = column("Date").ok_or_else(|| Error::ObservationParse {
        row: 1,
        message: format!(
            "missing required Date column. Available: {}",
            headers.iter().collect::<Vec<_>>().join(", ")
        ),
    })?;
    let flat_rate = column("FlatRate");
    let freight = column("Freight_USDMT");
    let world_scale = column("WorldScale");
    let mgo = column("MGO");
    let vlsfo = column("VLSFO");
    let hsfo = column("HSFO");

    let mut observations = Vec::new();
    let mut row_num: u64 = 1;
    for result in csv_reader.records() {
        row_num += 1;
        let record = result.map_err(|err| Error::ObservationParse {
            row: row_num,
            message: err.to_string(),
        })?;

        observations.push(MarketObservation {
            timestamp: parse_date(record.get(date_column).unwrap_or_default(), row_num)?,
            flat_rate: parse_cell(&record, flat_rate, "FlatRate", row_num)?,
            freight_usd_mt: parse_cell(&record, freight, "Freight_USDMT", row_num)?,
            world_scale: parse_cell(&record, world_scale, "WorldScale", row_num)?,
            mgo: parse_cell(&record, mgo, "MGO", row_num)?,
            vlsfo: parse_cell(&record, vlsfo, "VLSFO", row_num)?,
            hsfo: parse_cell(&record, hsfo, "HSFO", row_num)?,
        });
    }

    Ok(observations)
}

fn parse_date(raw: &str, row: u64) -> Result<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(raw, OBSERVATION_DATE_FORMAT);
    parsed.map_err(|err| Error::ObservationParse {
        row,
        message: format!("invalid Date '{raw}': {err}"),
    })
}

fn parse_cell(
    record: &StringRecord,
    index: Option<usize>,
    field: &str,
    row: u64,
) -> Result<Option<f64>> {
    let Some(raw) = index.and_then(|i| record.get(i)) else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    let value = raw.parse::<f64>().map_err(|err| Error::ObservationParse {
        row,
        message: format!("invalid {field} '{raw}': {err}"),
    })?;
    if !value.is_finite() {
        return Err(Error::ObservationParse {
            row,
            message: format!("invalid {field} '{raw}': value must be finite"),
        });
    }

    Ok(Some(value))
}
