//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Personal finance analytics and insights
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Turn a transaction file into charts, summary metrics, and insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print income/expense chart series for a time range
    Chart {
        /// Transaction file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Time range: weekly, monthly, yearly
        #[arg(short, long, default_value = "monthly")]
        range: String,

        /// Reference date (YYYY-MM-DD), defaults to today. Useful for
        /// reproducible output in scripts and tests.
        #[arg(long)]
        now: Option<String>,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the financial summary and category breakdown
    Summary {
        /// Transaction file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Derive and print insights
    Insights {
        /// Transaction file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// User profile file (.json) for rule thresholds
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Output as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
}
