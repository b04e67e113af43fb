//! Calc command handler: price observations for one route.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use wetfreight_lib::{
    read_observations_csv, MarketObservation, ReportFormat, RouteConstantsStore, TceCalculator,
    TceConfig, TceReport,
};

use crate::output::{FormulaArg, OutputFormat};
use crate::terminal::{format_dollars, ColorPalette};

/// Arguments for the calc command.
#[derive(Debug, Clone)]
pub struct CalcCommandArgs {
    /// Route code (case- and separator-insensitive).
    pub route: String,
    /// CSV file of observations; when absent the inline observation is used.
    pub observations: Option<PathBuf>,
    /// Inline single observation.
    pub inline: InlineObservation,
    pub format: OutputFormat,
    pub formula: FormulaArg,
    /// Bunker premium in $/mt.
    pub premium: f64,
}

/// Market inputs supplied directly on the command line.
#[derive(Debug, Clone, Default)]
pub struct InlineObservation {
    pub date: Option<NaiveDate>,
    pub flat_rate: Option<f64>,
    pub freight_usd_mt: Option<f64>,
    pub world_scale: Option<f64>,
    pub mgo: Option<f64>,
    pub vlsfo: Option<f64>,
    pub hsfo: Option<f64>,
}

impl InlineObservation {
    fn into_observation(self) -> Result<MarketObservation> {
        let Some(date) = self.date else {
            bail!("either --observations or --date must be given");
        };
        Ok(MarketObservation {
            timestamp: date,
            flat_rate: self.flat_rate,
            freight_usd_mt: self.freight_usd_mt,
            world_scale: self.world_scale,
            mgo: self.mgo,
            vlsfo: self.vlsfo,
            hsfo: self.hsfo,
        })
    }
}

/// Handle the calc subcommand.
pub fn handle_calc(store: &RouteConstantsStore, args: CalcCommandArgs) -> Result<()> {
    let observations = load_observations(args.observations.as_deref(), args.inline)?;

    let config = TceConfig {
        bunker_formula: args.formula.into(),
        bunker_premium: args.premium,
    };
    let report = TceCalculator::with_config(store, config)
        .report(&args.route, &observations)
        .with_context(|| format!("failed to calculate TCE for route {}", args.route))?;

    let format: ReportFormat = args.format.into();
    print!("{}", report.render(format)?);
    if format == ReportFormat::Table {
        print_latest_tce(&report, &ColorPalette::detect());
    }

    Ok(())
}

fn load_observations(
    path: Option<&Path>,
    inline: InlineObservation,
) -> Result<Vec<MarketObservation>> {
    match path {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open observations {}", path.display()))?;
            let observations = read_observations_csv(file)
                .with_context(|| format!("failed to read observations {}", path.display()))?;
            if observations.is_empty() {
                bail!("no observations found in {}", path.display());
            }
            Ok(observations)
        }
        None => Ok(vec![inline.into_observation()?]),
    }
}

fn print_latest_tce(report: &TceReport, palette: &ColorPalette) {
    if let Some(latest) = report.rows.last() {
        println!(
            "\nLatest TCE ({}): {}{}/day{}",
            latest.timestamp,
            palette.for_earnings(latest.tce),
            format_dollars(latest.tce),
            palette.reset
        );
    }
}
