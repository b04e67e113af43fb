//! Routes command handler for listing available benchmark routes.

use anyhow::Result;

use wetfreight_lib::{decompose, RouteConstantsStore};

use crate::terminal::ColorPalette;

/// Handle the routes subcommand.
pub fn handle_list_routes(store: &RouteConstantsStore) -> Result<()> {
    print_routes(store, &ColorPalette::detect());
    Ok(())
}

/// Print the route table to stdout.
fn print_routes(store: &RouteConstantsStore, palette: &ColorPalette) {
    let routes = store.routes_sorted();
    if routes.is_empty() {
        println!("No routes available.");
        return;
    }

    println!("Available routes ({}):", routes.len());
    println!(
        "{:<8} {:>12} {:>9} {:>12} {:<8} {}",
        "Code", "Cargo (mt)", "Comm %", "Voyage days", "Lumpsum", "Description"
    );
    for route in routes {
        let voyage = decompose(route);
        println!(
            "{bold}{:<8}{reset} {:>12.0} {:>9.2} {:>12.2} {:<8} {gray}{}{reset}",
            route.code,
            route.cargo.cargo_quantity_mt,
            route.cargo.commission_percent,
            voyage.total_voyage_days,
            if route.cargo.lumpsum { "yes" } else { "no" },
            route.description.as_deref().unwrap_or(""),
            bold = palette.white_bold,
            gray = palette.gray,
            reset = palette.reset,
        );
    }
}
