//! SQLite populator for CRM seed data.

use crate::error::SqlitePopulatorError;
use crate::insert::{insert_batch, select_ids};
use crate::schema::{generate_create_table, generate_drop_table, CrmTable};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OpenFlags};
use seed_generator::generators::day_offset;
use seed_generator::trend::leads_for_day;
use seed_generator::{CrmGenerator, GeneratorError, TrendMode, TrendParams};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Upper bound of interactions generated per account.
pub const MAX_INTERACTIONS_PER_ACCOUNT: u32 = 5;

/// Upper bound of orders generated per account.
pub const MAX_ORDERS_PER_ACCOUNT: u32 = 3;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows inserted.
    pub rows_inserted: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent inserting data.
    pub insert_duration: Duration,
    /// Number of insert batches executed.
    pub batch_count: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Fold another operation's metrics into this one.
    pub fn merge(&mut self, other: &PopulateMetrics) {
        self.rows_inserted += other.rows_inserted;
        self.total_duration += other.total_duration;
        self.generation_duration += other.generation_duration;
        self.insert_duration += other.insert_duration;
        self.batch_count += other.batch_count;
    }
}

/// SQLite populator that manages the CRM schema and inserts generated rows.
///
/// The populator owns the single connection used for a seeding run. It is
/// released when the populator is dropped; `close` does the same but reports
/// any error from the close itself.
pub struct SqlitePopulator {
    conn: Connection,
    generator: CrmGenerator,
}

impl SqlitePopulator {
    /// Open (or create) a file-backed database in read-write mode.
    pub fn open(
        path: impl AsRef<Path>,
        generator: CrmGenerator,
    ) -> Result<Self, SqlitePopulatorError> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // Test connection
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        info!("Opened SQLite database: {}", path.display());

        Ok(Self::with_connection(conn, generator))
    }

    /// Open a private in-memory database.
    pub fn open_in_memory(generator: CrmGenerator) -> Result<Self, SqlitePopulatorError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::with_connection(conn, generator))
    }

    /// Create a populator around an existing connection.
    pub fn with_connection(conn: Connection, generator: CrmGenerator) -> Self {
        Self { conn, generator }
    }

    /// Borrow the underlying connection (for queries outside the populator).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error from SQLite.
    pub fn close(self) -> Result<(), SqlitePopulatorError> {
        self.conn.close().map_err(|(_, e)| e)?;
        info!("Closed SQLite database");
        Ok(())
    }

    /// Create the table if it does not exist yet.
    pub fn create_table(&self, table: CrmTable) -> Result<(), SqlitePopulatorError> {
        let sql = generate_create_table(table);
        info!("Creating table: {}", table);
        debug!("DDL: {}", sql);
        self.conn.execute(&sql, [])?;
        Ok(())
    }

    pub fn create_accounts_table(&self) -> Result<(), SqlitePopulatorError> {
        self.create_table(CrmTable::Accounts)
    }

    pub fn create_leads_table(&self) -> Result<(), SqlitePopulatorError> {
        self.create_table(CrmTable::Leads)
    }

    pub fn create_opportunities_table(&self) -> Result<(), SqlitePopulatorError> {
        self.create_table(CrmTable::Opportunities)
    }

    pub fn create_interactions_table(&self) -> Result<(), SqlitePopulatorError> {
        self.create_table(CrmTable::Interactions)
    }

    pub fn create_orders_table(&self) -> Result<(), SqlitePopulatorError> {
        self.create_table(CrmTable::Orders)
    }

    /// Drop the table if it exists.
    pub fn drop_table(&self, table: CrmTable) -> Result<(), SqlitePopulatorError> {
        info!("Dropping table: {}", table);
        self.conn.execute(&generate_drop_table(table), [])?;
        Ok(())
    }

    /// Drop all five tables, tolerating ones that do not exist.
    pub fn drop_all_tables(&mut self) -> Result<(), SqlitePopulatorError> {
        let tx = self.conn.transaction()?;
        for table in CrmTable::ALL {
            info!("Dropping table: {}", table);
            tx.execute(&generate_drop_table(table), [])?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Whether the table currently exists.
    pub fn table_exists(&self, table: CrmTable) -> Result<bool, SqlitePopulatorError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table.name()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// CRM tables that currently exist, in drop order.
    pub fn existing_tables(&self) -> Result<Vec<CrmTable>, SqlitePopulatorError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
        let found = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .filter_map(|name| match name {
                Ok(name) => CrmTable::from_name(&name).map(Ok),
                Err(e) => Some(Err(e)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CrmTable::ALL
            .into_iter()
            .filter(|table| found.contains(table))
            .collect())
    }

    /// Get the row count for a table.
    pub fn row_count(&self, table: CrmTable) -> Result<u64, SqlitePopulatorError> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Insert `count` random accounts, committing once at the end.
    pub fn create_random_accounts(
        &mut self,
        count: u64,
    ) -> Result<PopulateMetrics, SqlitePopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        info!("Populating table 'accounts' with {} rows", count);

        let gen_start = Instant::now();
        let rows: Vec<_> = self.generator.accounts(count).collect();
        metrics.generation_duration = gen_start.elapsed();

        let insert_start = Instant::now();
        let tx = self.conn.transaction()?;
        metrics.rows_inserted = insert_batch(&tx, &rows)?;
        tx.commit()?;
        metrics.insert_duration = insert_start.elapsed();
        metrics.batch_count = 1;

        metrics.total_duration = start_time.elapsed();
        info!(
            "Population complete: {} accounts in {:?} ({:.2} rows/sec)",
            metrics.rows_inserted,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }

    /// Insert leads for each simulated day in `[0, day_count)`.
    ///
    /// The number of leads on day `i` comes from the trend curve (see
    /// `TrendMode`), each lead is dated `start + i days` and owned by a
    /// uniformly chosen existing account. Everything commits once at the end.
    /// An empty accounts table is only an error once a lead has to be made.
    pub fn create_random_leads(
        &mut self,
        start: NaiveDateTime,
        day_count: u32,
        mode: TrendMode,
        params: &TrendParams,
    ) -> Result<PopulateMetrics, SqlitePopulatorError> {
        if mode == TrendMode::ByDay && !params.is_finite() {
            return Err(SqlitePopulatorError::Config(format!(
                "trend parameters must be finite, got {params:?}"
            )));
        }

        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let account_ids = select_ids(&self.conn, CrmTable::Accounts)?;

        info!(
            "Populating table 'leads' over {} days from {} ({:?} trend, {} candidate accounts)",
            day_count,
            start,
            mode,
            account_ids.len()
        );
        if mode == TrendMode::Literal {
            debug!("Literal trend mode ignores amplitude/frequency/phase {:?}", params);
        }

        let tx = self.conn.transaction()?;
        for day in 0..day_count {
            let leads_today = leads_for_day(mode, day, params);
            let date = day_offset(start, day)
                .ok_or(GeneratorError::DateOutOfRange { start, days: day })?;

            let gen_start = Instant::now();
            let rows = (0..leads_today)
                .map(|_| self.generator.lead(&account_ids, date))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| SqlitePopulatorError::seeding("leads", e))?;
            metrics.generation_duration += gen_start.elapsed();

            let insert_start = Instant::now();
            let inserted = insert_batch(&tx, &rows)?;
            metrics.insert_duration += insert_start.elapsed();

            metrics.rows_inserted += inserted;
            metrics.batch_count += 1;
            debug!("Day {} complete: {} leads dated {}", day, inserted, date);
        }
        tx.commit()?;

        metrics.total_duration = start_time.elapsed();
        info!(
            "Population complete: {} leads in {:?} ({:.2} rows/sec)",
            metrics.rows_inserted,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }

    /// Insert `count` opportunities spread over the day window.
    ///
    /// Roughly half of them trace back to an existing lead. Fails with
    /// `NoAccounts` if `count > 0` and the accounts table is empty.
    pub fn create_random_opportunities(
        &mut self,
        start: NaiveDateTime,
        day_count: u32,
        count: u64,
    ) -> Result<PopulateMetrics, SqlitePopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let account_ids = select_ids(&self.conn, CrmTable::Accounts)?;
        let lead_ids = select_ids(&self.conn, CrmTable::Leads)?;
        info!(
            "Populating table 'opportunities' with {} rows ({} candidate leads)",
            count,
            lead_ids.len()
        );

        let gen_start = Instant::now();
        let rows = (0..count)
            .map(|_| {
                self.generator
                    .opportunity(&account_ids, &lead_ids, start, day_count)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SqlitePopulatorError::seeding("opportunities", e))?;
        metrics.generation_duration = gen_start.elapsed();

        let insert_start = Instant::now();
        let tx = self.conn.transaction()?;
        metrics.rows_inserted = insert_batch(&tx, &rows)?;
        tx.commit()?;
        metrics.insert_duration = insert_start.elapsed();
        metrics.batch_count = 1;

        metrics.total_duration = start_time.elapsed();
        info!(
            "Population complete: {} opportunities in {:?}",
            metrics.rows_inserted, metrics.total_duration
        );
        Ok(metrics)
    }

    /// Insert a handful of interactions and orders for every account.
    pub fn create_random_interactions_and_orders(
        &mut self,
        start: NaiveDateTime,
        day_count: u32,
    ) -> Result<PopulateMetrics, SqlitePopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        // Fan-out is per account, so no accounts simply means no rows.
        let account_ids = select_ids(&self.conn, CrmTable::Accounts)?;
        info!(
            "Populating tables 'interactions' and 'orders' for {} accounts",
            account_ids.len()
        );

        let gen_start = Instant::now();
        let mut interactions = Vec::new();
        let mut orders = Vec::new();
        for &account_id in &account_ids {
            for _ in 0..self.generator.fan_out(MAX_INTERACTIONS_PER_ACCOUNT) {
                interactions.push(self.generator.interaction(account_id, start, day_count)?);
            }
            for _ in 0..self.generator.fan_out(MAX_ORDERS_PER_ACCOUNT) {
                orders.push(self.generator.order(account_id, start, day_count)?);
            }
        }
        metrics.generation_duration = gen_start.elapsed();

        let insert_start = Instant::now();
        let tx = self.conn.transaction()?;
        metrics.rows_inserted += insert_batch(&tx, &interactions)?;
        metrics.rows_inserted += insert_batch(&tx, &orders)?;
        tx.commit()?;
        metrics.insert_duration = insert_start.elapsed();
        metrics.batch_count = 2;

        metrics.total_duration = start_time.elapsed();
        info!(
            "Population complete: {} interactions and {} orders in {:?}",
            interactions.len(),
            orders.len(),
            metrics.total_duration
        );
        Ok(metrics)
    }
}
