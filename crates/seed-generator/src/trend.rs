//! Sinusoidal lead-volume trend.
//!
//! `sin_curve` is the raw scalar function. `leads_for_day` turns it into a
//! per-day row count, either with the fixed arguments the seeding run has
//! always used (`TrendMode::Literal`) or by feeding the day index and the
//! caller's parameters through (`TrendMode::ByDay`).

use serde::Deserialize;

/// Scale applied to the curve before rounding to a row count.
pub const LEADS_SCALE: f64 = 100.0;

/// Fixed `(x, amplitude, frequency, phase)` used by literal mode.
///
/// Evaluates to `round(100 * (2 * sin(3) + 2)) == 228` leads on every day.
pub const LITERAL_ARGS: (f64, f64, f64, f64) = (1.0, 2.0, 3.0, 2.0);

/// `amplitude * sin(x * frequency) + phase`.
pub fn sin_curve(x: f64, amplitude: f64, frequency: f64, phase: f64) -> f64 {
    amplitude * (x * frequency).sin() + phase
}

/// How the per-day lead volume is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendMode {
    /// Evaluate the curve at `LITERAL_ARGS` every day. The volume is constant
    /// and the caller's amplitude/frequency/phase are ignored.
    #[default]
    Literal,
    /// Evaluate the curve at `x = day` with the caller's parameters.
    ByDay,
}

/// Caller-supplied curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TrendParams {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Default for TrendParams {
    fn default() -> Self {
        Self {
            amplitude: 3.0,
            frequency: 1.0,
            phase: 3.0,
        }
    }
}

impl TrendParams {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// True when every parameter is a finite number.
    pub fn is_finite(&self) -> bool {
        self.amplitude.is_finite() && self.frequency.is_finite() && self.phase.is_finite()
    }
}

/// Number of leads to generate on simulated day `day`.
///
/// Halves round to the even neighbour and negative curve values clamp to
/// zero.
pub fn leads_for_day(mode: TrendMode, day: u32, params: &TrendParams) -> u64 {
    let y = match mode {
        TrendMode::Literal => {
            let (x, amplitude, frequency, phase) = LITERAL_ARGS;
            sin_curve(x, amplitude, frequency, phase)
        }
        TrendMode::ByDay => sin_curve(
            f64::from(day),
            params.amplitude,
            params.frequency,
            params.phase,
        ),
    };

    let scaled = (LEADS_SCALE * y).round_ties_even();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else {
        scaled as u64
    }
}
