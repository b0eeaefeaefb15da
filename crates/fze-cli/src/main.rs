//! # fze CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fze_cli::catalog::{run_catalog, CatalogArgs};
use fze_cli::estimate::{run_estimate, EstimateArgs};
use fze_cli::load_estimator;

/// Free-zone formation package estimator.
///
/// Finds the formation packages a selection of business activities,
/// shareholders, visas and tenure qualifies for, and prints an itemized,
/// reproducible cost estimate.
#[derive(Parser, Debug)]
#[command(name = "fze", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Catalog file (YAML or JSON). Defaults to the built-in catalog.
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Fee schedule file (YAML). Defaults to the built-in fees.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the cost of a selection.
    Estimate(EstimateArgs),

    /// List, validate or digest the catalog.
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Estimate(args) => load_estimator(cli.catalog.as_deref(), cli.config.as_deref())
            .and_then(|estimator| run_estimate(args, &estimator)),
        Commands::Catalog(args) => run_catalog(args, cli.catalog.as_deref()),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
