//! EmissionsIQ CLI
//!
//! Command-line client for a running EmissionsIQ server.

#![allow(clippy::print_stdout)]

use clap::Parser;
use domain::EmissionFactorTable;
use presentation_cli::{
    ApiClient, Cli, Commands,
    cli::log_filter_from_verbosity,
    output::{format_comparison, format_factors, format_route},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if matches!(cli.command, Commands::Factors) {
        println!("{}", format_factors(&EmissionFactorTable::standard()));
        return Ok(());
    }

    let client = ApiClient::new(&cli.url)?;

    match cli.command {
        Commands::Calculate {
            origin,
            destination,
            mode,
        } => {
            let route = client.calculate(&origin, &destination, mode).await?;
            println!("{origin} -> {destination}");
            println!("{}", format_route(&route));
        },

        Commands::Compare {
            origin,
            destination,
        } => {
            let routes = client.compare(&origin, &destination).await?;
            println!("{origin} -> {destination}");
            println!("{}", format_comparison(&routes));
        },

        Commands::Health => match client.health().await {
            Ok(version) => println!("Healthy (version {version})"),
            Err(e) => {
                println!("Unhealthy: {e}");
                std::process::exit(1);
            },
        },

        Commands::Factors => {},
    }

    Ok(())
}
