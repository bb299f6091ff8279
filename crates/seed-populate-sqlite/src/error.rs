//! Error types for the SQLite populator.

use seed_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur during SQLite population.
#[derive(Error, Debug)]
pub enum SqlitePopulatorError {
    /// SQLite connection or statement error.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A row needed an account but the accounts table is empty.
    #[error("No accounts exist; seed accounts before {0}")]
    NoAccounts(&'static str),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SqlitePopulatorError {
    /// Attribute a generator failure to the table being seeded.
    pub(crate) fn seeding(table: &'static str, err: GeneratorError) -> Self {
        match err {
            GeneratorError::NoAccounts => Self::NoAccounts(table),
            other => Self::Generator(other),
        }
    }
}
