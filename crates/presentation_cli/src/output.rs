//! Plain-text rendering of API results

use std::fmt::Write;

use domain::EmissionFactorTable;

use crate::client::RouteView;

/// Render one route as a short block
pub fn format_route(route: &RouteView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Mode:      {}", route.mode);
    let _ = writeln!(out, "Distance:  {:.1} km", route.distance / 1000.0);
    let _ = writeln!(out, "Duration:  {}", format_duration(route.duration));
    let _ = write!(out, "Emissions: {:.2} kg CO2", route.emissions);
    out
}

/// Render compared routes as a ranked table, lowest emissions first
pub fn format_comparison(routes: &[RouteView]) -> String {
    if routes.is_empty() {
        return "No route could be calculated for any mode".to_string();
    }

    let mut out = format!(
        "{:<3} {:<11} {:>10} {:>10} {:>14}",
        "#", "MODE", "KM", "DURATION", "KG CO2"
    );
    for (rank, route) in routes.iter().enumerate() {
        let _ = write!(
            out,
            "\n{:<3} {:<11} {:>10.1} {:>10} {:>14.2}",
            rank + 1,
            route.mode.as_str(),
            route.distance / 1000.0,
            format_duration(route.duration),
            route.emissions
        );
    }
    out
}

/// Render the factor table, one mode per line
pub fn format_factors(table: &EmissionFactorTable) -> String {
    table
        .iter()
        .map(|(mode, factor)| format!("{:<11} {factor:.2} kg CO2/km", mode.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format seconds as `1h 05m` or `42m`
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else {
        format!("{minutes}m")
    }
}
