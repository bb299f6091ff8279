//! Common CLI argument definitions shared by all populators.

use clap::{Args, ValueEnum};
use seed_generator::TrendMode;
use std::path::PathBuf;

/// Common seeding arguments.
///
/// Every value is optional so a plan file can fill in what the command line
/// leaves out; anything still unset falls back to the built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonSeedArgs {
    /// Path to a YAML seed plan (values on the command line take precedence)
    #[arg(long, short = 'p')]
    pub plan: Option<PathBuf>,

    /// Number of accounts to generate [default: 100]
    #[arg(long)]
    pub account_count: Option<u64>,

    /// Number of simulated days of leads [default: 365]
    #[arg(long)]
    pub days: Option<u32>,

    /// Trend curve amplitude [default: 3]
    #[arg(long, allow_hyphen_values = true)]
    pub amplitude: Option<f64>,

    /// Trend curve frequency [default: 1]
    #[arg(long, allow_hyphen_values = true)]
    pub frequency: Option<f64>,

    /// Trend curve phase [default: 3]
    #[arg(long, allow_hyphen_values = true)]
    pub phase: Option<f64>,

    /// How the daily lead volume is derived [default: literal]
    #[arg(long, value_enum)]
    pub trend_mode: Option<TrendModeArg>,

    /// First simulated day, RFC 3339 or YYYY-MM-DD (default: now)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Random seed for reproducible output (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also create and seed opportunities, interactions and orders
    #[arg(long)]
    pub extended: bool,

    /// Number of opportunities to generate with --extended [default: 200]
    #[arg(long)]
    pub opportunity_count: Option<u64>,
}

/// CLI spelling of `seed_generator::TrendMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TrendModeArg {
    /// Fixed curve arguments; the same volume every day
    #[value(name = "literal")]
    Literal,
    /// Curve evaluated at the day index with the given parameters
    #[value(name = "by-day")]
    ByDay,
}

impl From<TrendModeArg> for TrendMode {
    fn from(arg: TrendModeArg) -> Self {
        match arg {
            TrendModeArg::Literal => TrendMode::Literal,
            TrendModeArg::ByDay => TrendMode::ByDay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonSeedArgs,
    }

    #[test]
    fn test_defaults_are_unset() {
        let cli = TestCli::parse_from(["test"]);
        assert!(cli.common.plan.is_none());
        assert!(cli.common.account_count.is_none());
        assert!(cli.common.trend_mode.is_none());
        assert!(!cli.common.extended);
    }

    #[test]
    fn test_parse_all() {
        let cli = TestCli::parse_from([
            "test",
            "--account-count",
            "10",
            "--days",
            "30",
            "--amplitude",
            "-2.5",
            "--trend-mode",
            "by-day",
            "--seed",
            "7",
            "--extended",
        ]);

        assert_eq!(cli.common.account_count, Some(10));
        assert_eq!(cli.common.days, Some(30));
        assert_eq!(cli.common.amplitude, Some(-2.5));
        assert_eq!(cli.common.trend_mode, Some(TrendModeArg::ByDay));
        assert_eq!(cli.common.seed, Some(7));
        assert!(cli.common.extended);
    }

    #[test]
    fn test_trend_mode_conversion() {
        assert_eq!(TrendMode::from(TrendModeArg::Literal), TrendMode::Literal);
        assert_eq!(TrendMode::from(TrendModeArg::ByDay), TrendMode::ByDay);
    }
}
