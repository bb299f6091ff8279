//! CLI argument definitions for the SQLite populator.

use clap::Args;
use std::path::PathBuf;

pub use seed_populate::CommonSeedArgs;

/// Default database file.
pub const DEFAULT_DATABASE: &str = "crm.db";

/// SQLite-specific seed arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct SqliteSeedArgs {
    /// Path to the SQLite database file, created if absent [default: crm.db]
    #[arg(long, short = 'd', env = "CRM_SEED_DATABASE")]
    pub database: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonSeedArgs,
}
