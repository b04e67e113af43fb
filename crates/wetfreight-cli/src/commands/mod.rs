// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments and
// dispatches to these handlers.

pub mod calc;
pub mod routes;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use wetfreight_lib::RouteConstantsStore;

/// Environment variable naming a route constants JSON file.
pub const ROUTE_CONSTANTS_ENV: &str = "WETFREIGHT_ROUTE_CONSTANTS";

/// Load the route constants store.
///
/// Resolution order:
/// 1. The `--constants` flag
/// 2. The `WETFREIGHT_ROUTE_CONSTANTS` environment variable
/// 3. The table bundled with the library
pub fn load_route_store(explicit: Option<&Path>) -> Result<RouteConstantsStore> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(ROUTE_CONSTANTS_ENV).map(PathBuf::from));

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading route constants");
            RouteConstantsStore::from_path(&path)
                .with_context(|| format!("failed to load route constants from {}", path.display()))
        }
        None => RouteConstantsStore::builtin().context("failed to load bundled route constants"),
    }
}
