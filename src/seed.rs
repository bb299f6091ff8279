//! Seeding run orchestration.

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use seed_generator::trend::leads_for_day;
use seed_generator::CrmGenerator;
use seed_populate_sqlite::{CrmTable, PopulateMetrics, SqlitePopulator};
use std::time::{Duration, Instant};

use crate::config::SeedConfig;

/// Outcome of a seeding run.
#[derive(Debug, Clone)]
pub struct SeedSummary {
    /// Row count of every table that exists after the run, in drop order.
    pub tables: Vec<(CrmTable, u64)>,
    /// Smallest and largest daily lead volume over the window.
    pub leads_per_day: Option<(u64, u64)>,
    pub start_date: NaiveDateTime,
    pub metrics: PopulateMetrics,
    pub elapsed: Duration,
}

impl SeedSummary {
    /// Row count for a table, if it exists.
    pub fn rows(&self, table: CrmTable) -> Option<u64> {
        self.tables
            .iter()
            .find(|(t, _)| *t == table)
            .map(|(_, count)| *count)
    }
}

/// Run one full seeding pass against `config.database`.
///
/// Drops every CRM table, recreates accounts and leads (plus the extended
/// tables when asked), seeds them and closes the connection. Any failure
/// aborts the run; batches committed before the failure stay committed.
pub fn run_seed(config: &SeedConfig) -> anyhow::Result<SeedSummary> {
    let started = Instant::now();
    let start_date = config
        .start_date
        .unwrap_or_else(|| Local::now().naive_local());

    tracing::info!(
        "Seeding {} with {} accounts over {} days from {} (seed={:?})",
        config.database.display(),
        config.account_count,
        config.days,
        start_date,
        config.seed
    );

    let generator = CrmGenerator::from_seed_opt(config.seed);
    let mut populator = SqlitePopulator::open(&config.database, generator)
        .with_context(|| format!("Failed to open database {:?}", config.database))?;

    populator
        .drop_all_tables()
        .context("Failed to drop existing tables")?;

    populator
        .create_accounts_table()
        .context("Failed to create accounts table")?;
    populator
        .create_leads_table()
        .context("Failed to create leads table")?;
    if config.extended {
        populator
            .create_opportunities_table()
            .context("Failed to create opportunities table")?;
        populator
            .create_interactions_table()
            .context("Failed to create interactions table")?;
        populator
            .create_orders_table()
            .context("Failed to create orders table")?;
    }

    let mut metrics = PopulateMetrics::default();

    let accounts = populator
        .create_random_accounts(config.account_count)
        .context("Failed to seed accounts")?;
    metrics.merge(&accounts);

    let leads = populator
        .create_random_leads(start_date, config.days, config.trend_mode, &config.trend)
        .context("Failed to seed leads")?;
    metrics.merge(&leads);

    if config.extended {
        let opportunities = populator
            .create_random_opportunities(start_date, config.days, config.opportunity_count)
            .context("Failed to seed opportunities")?;
        metrics.merge(&opportunities);

        let activity = populator
            .create_random_interactions_and_orders(start_date, config.days)
            .context("Failed to seed interactions and orders")?;
        metrics.merge(&activity);
    }

    let mut tables = Vec::new();
    for table in populator
        .existing_tables()
        .context("Failed to list tables")?
    {
        let count = populator
            .row_count(table)
            .with_context(|| format!("Failed to count rows in {table}"))?;
        tables.push((table, count));
    }

    populator.close().context("Failed to close database")?;

    let summary = SeedSummary {
        tables,
        leads_per_day: lead_volume_range(config),
        start_date,
        metrics,
        elapsed: started.elapsed(),
    };
    tracing::info!(
        "Seeding complete: {} rows in {:?}",
        summary.metrics.rows_inserted,
        summary.elapsed
    );
    Ok(summary)
}

fn lead_volume_range(config: &SeedConfig) -> Option<(u64, u64)> {
    let volumes = (0..config.days).map(|day| leads_for_day(config.trend_mode, day, &config.trend));
    volumes.fold(None, |range, n| match range {
        None => Some((n, n)),
        Some((lo, hi)) => Some((lo.min(n), hi.max(n))),
    })
}
