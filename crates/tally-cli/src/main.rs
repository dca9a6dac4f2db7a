//! Tally CLI - Personal finance analytics
//!
//! Usage:
//!   tally chart --file tx.csv --range weekly    Chart series for a range
//!   tally summary --file tx.csv                 Summary metrics
//!   tally insights --file tx.csv                Derived insights

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Chart {
            file,
            range,
            now,
            json,
        } => commands::cmd_chart(&file, &range, now.as_deref(), json),
        Commands::Summary { file, json } => commands::cmd_summary(&file, json),
        Commands::Insights {
            file,
            profile,
            json,
        } => commands::cmd_insights(&file, profile.as_deref(), json),
    }
}
