//! Output format selection for the CLI.

use clap::ValueEnum;

use wetfreight_lib::{BunkerFormula, ReportFormat};

/// Output format for calculation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// One CSV row per observation.
    Csv,
    /// Pretty-printed JSON report.
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => ReportFormat::Table,
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// Bunker cost formula selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormulaArg {
    /// Non-ECA IFO and ECA LSMGO at spot prices.
    #[default]
    EcaHistory,
    /// Non-ECA IFO and ECA LSMGO with the bunker premium.
    ChinaEca,
    /// Non-ECA IFO only, with the bunker premium.
    NonEca,
}

impl From<FormulaArg> for BunkerFormula {
    fn from(formula: FormulaArg) -> Self {
        match formula {
            FormulaArg::EcaHistory => BunkerFormula::EcaHistory,
            FormulaArg::ChinaEca => BunkerFormula::ChinaEca,
            FormulaArg::NonEca => BunkerFormula::NonEca,
        }
    }
}
