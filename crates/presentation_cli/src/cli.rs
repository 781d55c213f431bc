//! Command-line arguments

use clap::{Parser, Subcommand};
use domain::TravelMode;

/// Default server the client talks to
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// EmissionsIQ CLI
#[derive(Debug, Parser)]
#[command(name = "emissions-cli")]
#[command(author, version, about = "EmissionsIQ route emissions CLI", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Server URL
    #[arg(
        short,
        long,
        global = true,
        env = "EMISSIONS_URL",
        default_value = DEFAULT_SERVER_URL
    )]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calculate emissions for a single route
    ///
    /// Example: emissions-cli calculate "Saint Louis, MO" "Seattle, WA" --mode TRANSIT
    Calculate {
        /// Origin address
        origin: String,

        /// Destination address
        destination: String,

        /// Travel mode (DRIVE, BICYCLE, WALK, TRANSIT, MOTORCYCLE)
        #[arg(short, long, default_value = "DRIVE")]
        mode: TravelMode,
    },

    /// Compare driving, cycling and walking for a route
    Compare {
        /// Origin address
        origin: String,

        /// Destination address
        destination: String,
    },

    /// Check server health
    Health,

    /// Print the default emission factor table
    Factors,
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Join a base URL and an absolute path without doubling the slash
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
