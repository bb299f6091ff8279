//! YAML seed plans.
//!
//! A plan carries the same knobs as the command line. Every field is
//! optional; missing ones fall through to the built-in defaults.
//!
//! ```yaml
//! database: crm.db
//! account_count: 100
//! days: 365
//! trend_mode: by-day
//! amplitude: 3.0
//! frequency: 1.0
//! phase: 3.0
//! start_date: "2024-01-01"
//! seed: 42
//! extended: true
//! opportunity_count: 200
//! ```

use seed_generator::TrendMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or resolving seed configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading plan file
    #[error("Failed to read plan file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Start date in none of the accepted formats
    #[error("Invalid start date '{0}' (expected RFC 3339 or YYYY-MM-DD)")]
    InvalidStartDate(String),

    /// Trend parameters that cannot produce a row count
    #[error("Trend parameters must be finite numbers")]
    NonFiniteTrend,
}

/// Seeding parameters as written in a plan file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPlan {
    pub database: Option<PathBuf>,
    pub account_count: Option<u64>,
    pub days: Option<u32>,
    pub trend_mode: Option<TrendMode>,
    pub amplitude: Option<f64>,
    pub frequency: Option<f64>,
    pub phase: Option<f64>,
    pub start_date: Option<String>,
    pub seed: Option<u64>,
    pub extended: Option<bool>,
    pub opportunity_count: Option<u64>,
}

impl SeedPlan {
    /// Load a plan from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
