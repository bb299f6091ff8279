//! crm-seed library
//!
//! Fills a SQLite database with synthetic CRM data: accounts, and leads
//! whose daily volume follows a sinusoidal trend, optionally followed by
//! opportunities, interactions and orders.
//!
//! # Crates
//!
//! - `seed_generator` - row generation and the trend function
//! - `seed_populate` - argument types shared by populators
//! - `seed_populate_sqlite` - schema management and SQLite inserts
//!
//! # CLI Usage
//!
//! ```bash
//! # Classic run: crm.db, 100 accounts, 365 days of leads from now
//! crm-seed
//!
//! # Reproducible run with a day-varying trend and the extended tables
//! crm-seed --database demo.db --seed 42 --trend-mode by-day --extended
//! ```

pub mod config;
pub mod seed;

pub use config::{ConfigError, SeedConfig, SeedPlan};
pub use seed::{run_seed, SeedSummary};
