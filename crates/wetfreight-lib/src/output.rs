use std::fmt::Write;
use std::io;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::fuel::BunkerFormula;
use crate::tce::CalculationResult;
use crate::voyage::VoyageDecomposition;

/// Presentation style for turning a [`TceReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Table,
    Csv,
    Json,
}

/// TCE rows for one route together with the route context they were priced against.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TceReport {
    pub route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub formula: BunkerFormula,
    pub voyage: VoyageDecomposition,
    pub rows: Vec<CalculationResult>,
}

impl TceReport {
    /// Render the report in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Table => Ok(self.render_table()),
            ReportFormat::Csv => self.render_csv(),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_table(&self) -> String {
        let mut buffer = String::new();

        match &self.description {
            Some(description) => {
                let _ = writeln!(buffer, "Route {} ({})", self.route, description);
            }
            None => {
                let _ = writeln!(buffer, "Route {}", self.route);
            }
        }
        let _ = writeln!(
            buffer,
            "Voyage days: {:.3}  IFO non-ECA: {:.3} mt  LSMGO ECA: {:.3} mt  Formula: {}",
            self.voyage.total_voyage_days,
            self.voyage.ifo_non_eca_mt,
            self.voyage.lsmgo_eca_mt,
            self.formula
        );
        let _ = writeln!(
            buffer,
            "{:<10} {:>14} {:>14} {:>14} {:>14} {:>12}",
            "Date", "Gross Freight", "Bunker Cost", "Net Freight", "Net Income", "TCE"
        );
        for row in &self.rows {
            let _ = writeln!(
                buffer,
                "{:<10} {:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>12.2}",
                row.timestamp,
                row.gross_freight,
                row.bunker_cost,
                row.net_freight,
                row.net_income,
                row.tce
            );
        }

        buffer
    }

    fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in &self.rows {
            writer.serialize(row).map_err(csv_error)?;
        }
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        String::from_utf8(bytes).map_err(|err| Error::Io(io::Error::other(err)))
    }
}

fn csv_error(err: csv::Error) -> Error {
    Error::Io(io::Error::other(err))
}
