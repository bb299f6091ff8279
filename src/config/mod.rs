//! Seed configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML plan, then
//! explicit command-line flags. The defaults reproduce the classic run:
//! `crm.db`, 100 accounts, 365 days of leads from now, trend (3, 1, 3) in
//! literal mode, no extended tables.

pub mod date;
pub mod plan;

pub use date::parse_start_date;
pub use plan::{ConfigError, SeedPlan};

use chrono::NaiveDateTime;
use seed_generator::{TrendMode, TrendParams};
use seed_populate_sqlite::args::DEFAULT_DATABASE;
use seed_populate_sqlite::SqliteSeedArgs;
use std::path::PathBuf;

pub const DEFAULT_ACCOUNT_COUNT: u64 = 100;
pub const DEFAULT_DAYS: u32 = 365;
pub const DEFAULT_OPPORTUNITY_COUNT: u64 = 200;

/// Fully resolved parameters for one seeding run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub database: PathBuf,
    pub account_count: u64,
    pub days: u32,
    pub trend_mode: TrendMode,
    pub trend: TrendParams,
    /// First simulated day; `None` means the current local time.
    pub start_date: Option<NaiveDateTime>,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Also create and seed opportunities, interactions and orders.
    pub extended: bool,
    pub opportunity_count: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            account_count: DEFAULT_ACCOUNT_COUNT,
            days: DEFAULT_DAYS,
            trend_mode: TrendMode::default(),
            trend: TrendParams::default(),
            start_date: None,
            seed: None,
            extended: false,
            opportunity_count: DEFAULT_OPPORTUNITY_COUNT,
        }
    }
}

impl SeedConfig {
    /// Resolve command-line arguments (and the plan they may point at).
    pub fn from_args(args: &SqliteSeedArgs) -> Result<Self, ConfigError> {
        let plan = match &args.common.plan {
            Some(path) => SeedPlan::from_file(path)?,
            None => SeedPlan::default(),
        };
        Self::default().with_plan(&plan)?.with_args(args)
    }

    /// Apply a plan's values over this configuration.
    pub fn with_plan(mut self, plan: &SeedPlan) -> Result<Self, ConfigError> {
        if let Some(database) = &plan.database {
            self.database = database.clone();
        }
        if let Some(count) = plan.account_count {
            self.account_count = count;
        }
        if let Some(days) = plan.days {
            self.days = days;
        }
        if let Some(mode) = plan.trend_mode {
            self.trend_mode = mode;
        }
        if let Some(amplitude) = plan.amplitude {
            self.trend.amplitude = amplitude;
        }
        if let Some(frequency) = plan.frequency {
            self.trend.frequency = frequency;
        }
        if let Some(phase) = plan.phase {
            self.trend.phase = phase;
        }
        if let Some(start) = &plan.start_date {
            self.start_date = Some(parse_date(start)?);
        }
        if let Some(seed) = plan.seed {
            self.seed = Some(seed);
        }
        if let Some(extended) = plan.extended {
            self.extended = extended;
        }
        if let Some(count) = plan.opportunity_count {
            self.opportunity_count = count;
        }
        self.validate()
    }

    /// Apply explicit command-line values over this configuration.
    pub fn with_args(mut self, args: &SqliteSeedArgs) -> Result<Self, ConfigError> {
        let common = &args.common;

        if let Some(database) = &args.database {
            self.database = database.clone();
        }
        if let Some(count) = common.account_count {
            self.account_count = count;
        }
        if let Some(days) = common.days {
            self.days = days;
        }
        if let Some(mode) = common.trend_mode {
            self.trend_mode = mode.into();
        }
        if let Some(amplitude) = common.amplitude {
            self.trend.amplitude = amplitude;
        }
        if let Some(frequency) = common.frequency {
            self.trend.frequency = frequency;
        }
        if let Some(phase) = common.phase {
            self.trend.phase = phase;
        }
        if let Some(start) = &common.start_date {
            self.start_date = Some(parse_date(start)?);
        }
        if let Some(seed) = common.seed {
            self.seed = Some(seed);
        }
        if common.extended {
            self.extended = true;
        }
        if let Some(count) = common.opportunity_count {
            self.opportunity_count = count;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !self.trend.is_finite() {
            return Err(ConfigError::NonFiniteTrend);
        }
        Ok(self)
    }
}

fn parse_date(s: &str) -> Result<NaiveDateTime, ConfigError> {
    parse_start_date(s).ok_or_else(|| ConfigError::InvalidStartDate(s.to_string()))
}
