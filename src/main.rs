//! Command-line interface for crm-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Drop and reseed crm.db with the classic parameters
//! crm-seed
//!
//! # Seed a different file with a fixed RNG seed
//! crm-seed --database /tmp/demo.db --seed 42
//!
//! # Let the lead volume follow the curve day by day
//! crm-seed --trend-mode by-day --amplitude 2 --frequency 0.1 --phase 3
//!
//! # Read parameters from a plan, overriding one of them
//! crm-seed --plan seed_plan.yaml --days 30
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see progress.

use anyhow::Context;
use clap::Parser;
use crm_seed::{run_seed, SeedConfig};
use seed_populate_sqlite::SqliteSeedArgs;

#[derive(Parser)]
#[command(name = "crm-seed")]
#[command(about = "Populate a SQLite database with synthetic CRM accounts and leads")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: SqliteSeedArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = SeedConfig::from_args(&cli.args).context("Invalid seed configuration")?;
    tracing::debug!("Resolved configuration: {:?}", config);

    let summary = run_seed(&config)?;

    for (table, rows) in &summary.tables {
        tracing::info!("{}: {} rows", table, rows);
    }
    if let Some((lo, hi)) = summary.leads_per_day {
        tracing::info!("Leads per day: {}..={}", lo, hi);
    }

    Ok(())
}
