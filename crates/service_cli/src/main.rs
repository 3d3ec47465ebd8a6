//! riskctl - Command Line Operations for the Monte Carlo Risk Engine
//!
//! This is the operational entry point for the risk engine library.
//!
//! # Commands
//!
//! - `riskctl run --portfolio <file>` - Run a VaR/CVaR calculation
//! - `riskctl sample` - Emit the bundled sample portfolio
//!
//! # Architecture
//!
//! As part of the service layer, this crate orchestrates the core and
//! engine layers behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Monte Carlo Risk Engine CLI
#[derive(Parser)]
#[command(name = "riskctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a VaR/CVaR calculation over a portfolio file
    Run {
        /// Path to portfolio file (JSON array of assets)
        #[arg(short, long)]
        portfolio: String,

        /// Path to correlation matrix file (JSON list of lists);
        /// identity when omitted
        #[arg(short, long)]
        correlation: Option<String>,

        /// Number of Monte Carlo trials
        #[arg(short = 'n', long, default_value = "100000")]
        simulations: usize,

        /// Time horizon in trading days
        #[arg(short = 'd', long, default_value = "1")]
        horizon_days: u32,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Emit the bundled sample portfolio
    Sample {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Run {
            portfolio,
            correlation,
            simulations,
            horizon_days,
            format,
        } => commands::run::run(
            &portfolio,
            correlation.as_deref(),
            simulations,
            horizon_days,
            &format,
        ),
        Commands::Sample { output } => commands::sample::run(output.as_deref()),
    }
}
