//! SQLite populator for crm-seed.
//!
//! This crate owns the CRM schema (five tables rooted at `accounts`) and
//! the `SqlitePopulator`, which drops and recreates that schema and fills
//! it with rows from `seed_generator::CrmGenerator`.
//!
//! # Example
//!
//! ```ignore
//! use seed_generator::{CrmGenerator, TrendMode, TrendParams};
//! use seed_populate_sqlite::SqlitePopulator;
//!
//! let mut populator = SqlitePopulator::open("crm.db", CrmGenerator::from_entropy())?;
//! populator.drop_all_tables()?;
//! populator.create_accounts_table()?;
//! populator.create_leads_table()?;
//! populator.create_random_accounts(100)?;
//! populator.create_random_leads(start, 365, TrendMode::Literal, &TrendParams::default())?;
//! populator.close()?;
//! ```

pub mod args;
mod error;
mod insert;
mod populator;
pub mod schema;

pub use args::{CommonSeedArgs, SqliteSeedArgs};
pub use error::SqlitePopulatorError;
pub use populator::{PopulateMetrics, SqlitePopulator};
pub use schema::CrmTable;
