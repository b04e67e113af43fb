use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wetfreight_cli::commands::calc::{handle_calc, CalcCommandArgs, InlineObservation};
use wetfreight_cli::commands::load_route_store;
use wetfreight_cli::commands::routes::handle_list_routes;
use wetfreight_cli::output::{FormulaArg, OutputFormat};
use wetfreight_lib::DEFAULT_BUNKER_PREMIUM;

#[derive(Parser, Debug)]
#[command(author, version, about = "Tanker Time Charter Equivalent calculator")]
struct Cli {
    /// Route constants JSON file (overrides WETFREIGHT_ROUTE_CONSTANTS).
    #[arg(long, global = true)]
    constants: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the benchmark routes in the route constants table.
    Routes,
    /// Calculate TCE for a route from market observations.
    Calc(CalcArgs),
}

#[derive(Args, Debug)]
struct CalcArgs {
    /// Route code, e.g. TD3_C (case and separators are ignored).
    #[arg(long)]
    route: String,

    /// CSV file of observations with a Date column.
    #[arg(long, conflicts_with = "date")]
    observations: Option<PathBuf>,

    /// Observation date (YYYY-MM-DD) for a single inline observation.
    #[arg(long, required_unless_present = "observations")]
    date: Option<NaiveDate>,

    /// World Scale flat rate in $/mt.
    #[arg(long)]
    flat_rate: Option<f64>,

    /// Pre-computed freight in $/mt.
    #[arg(long = "freight-usd-mt")]
    freight_usd_mt: Option<f64>,

    /// World Scale points, or the dollar lumpsum on lumpsum routes.
    #[arg(long)]
    world_scale: Option<f64>,

    /// MGO spot price in $/mt.
    #[arg(long)]
    mgo: Option<f64>,

    /// VLSFO spot price in $/mt.
    #[arg(long)]
    vlsfo: Option<f64>,

    /// HSFO spot price in $/mt.
    #[arg(long)]
    hsfo: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Bunker cost formula.
    #[arg(long, value_enum, default_value_t = FormulaArg::EcaHistory)]
    formula: FormulaArg,

    /// Bunker premium in $/mt for the china-eca and non-eca formulas.
    #[arg(long, default_value_t = DEFAULT_BUNKER_PREMIUM)]
    premium: f64,
}

impl From<CalcArgs> for CalcCommandArgs {
    fn from(args: CalcArgs) -> Self {
        Self {
            route: args.route,
            observations: args.observations,
            inline: InlineObservation {
                date: args.date,
                flat_rate: args.flat_rate,
                freight_usd_mt: args.freight_usd_mt,
                world_scale: args.world_scale,
                mgo: args.mgo,
                vlsfo: args.vlsfo,
                hsfo: args.hsfo,
            },
            format: args.format,
            formula: args.formula,
            premium: args.premium,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let store = load_route_store(cli.constants.as_deref())?;

    match cli.command {
        Command::Routes => handle_list_routes(&store),
        Command::Calc(args) => handle_calc(&store, args.into()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
