//! Per-run analysis configuration.
//!
//! The host passes one [`AnalysisConfig`] into each pipeline run; nothing
//! is read from ambient state. Configuration is validated eagerly — an
//! invalid strategy parameter rejects the run before any grid work happens
//! rather than producing a silently-wrong schedule.
//!
//! # Strategy selection
//!
//! Peak selection is a single step parameterized by the [`Strategy`] tag.
//! One run uses exactly one strategy; see the variant docs for the exact
//! selection rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Granularity;

/// Peak-selection strategy for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Select every slot whose adjusted count meets a fixed trigger value.
    /// No per-day limit.
    FixedThreshold {
        /// Minimum adjusted count for a slot to qualify. Must be positive.
        threshold: f64,
    },
    /// Derive the trigger from the data: the given percentile of all
    /// adjusted counts across the whole table, clamped below at 1. The
    /// derived value is surfaced in the report for display.
    Percentile {
        /// Percentile cutoff in `[1, 100)`.
        percentile: f64,
    },
    /// Select the N busiest slots of each day independently, ties going to
    /// the earlier slot. Saturday gets its own limit (domain rule: Saturday
    /// typically warrants a single block). Zero-volume days are closed.
    TopPerDay {
        /// Slot limit for Sunday–Friday. Must be positive.
        weekday: usize,
        /// Slot limit for Saturday. Must be positive.
        saturday: usize,
    },
    /// Select at most the busiest morning slot and the busiest afternoon
    /// slot per weekday; Saturday and Sunday get at most the single busiest
    /// slot of the whole day. Zero-volume days are closed.
    AmPmSplit,
}

/// Configuration error raised by eager validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The reporting-period divisor was zero.
    #[error("period divisor must be a positive integer")]
    ZeroPeriodDivisor,
    /// A fixed trigger threshold was zero, negative, or not finite.
    #[error("trigger threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),
    /// A percentile cutoff fell outside `[1, 100)`.
    #[error("percentile must lie in [1, 100), got {0}")]
    PercentileOutOfRange(f64),
    /// A top-N slot limit was zero.
    #[error("top-N slot limit must be positive")]
    ZeroTopN,
}

/// One run's worth of configuration.
///
/// # Example
/// ```
/// use power_hours::config::{AnalysisConfig, Strategy};
/// use power_hours::models::Granularity;
///
/// let config = AnalysisConfig::new(Strategy::FixedThreshold { threshold: 10.0 })
///     .with_period_divisor(4) // report is a 4-week rollup
///     .with_granularity(Granularity::HalfHour);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of reporting periods summed in the uploaded report. Raw
    /// counts are divided by this to approximate a single-week average:
    /// 1 for a single-week report, 4 for the standard 4-week rollup.
    pub period_divisor: u32,
    /// Slot width the analysis runs at.
    pub granularity: Granularity,
    /// Peak-selection strategy.
    pub strategy: Strategy,
}

impl AnalysisConfig {
    /// Creates a single-week, half-hour configuration with the given
    /// strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            period_divisor: 1,
            granularity: Granularity::HalfHour,
            strategy,
        }
    }

    /// Sets the reporting-period divisor.
    pub fn with_period_divisor(mut self, period_divisor: u32) -> Self {
        self.period_divisor = period_divisor;
        self
    }

    /// Sets the slot granularity.
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Validates all parameters. Called by the pipeline before any other
    /// work; hosts may also call it directly to fail fast on user input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period_divisor == 0 {
            return Err(ConfigError::ZeroPeriodDivisor);
        }
        match self.strategy {
            Strategy::FixedThreshold { threshold } => {
                if !threshold.is_finite() || threshold <= 0.0 {
                    return Err(ConfigError::InvalidThreshold(threshold));
                }
            }
            Strategy::Percentile { percentile } => {
                if !(1.0..100.0).contains(&percentile) {
                    return Err(ConfigError::PercentileOutOfRange(percentile));
                }
            }
            Strategy::TopPerDay { weekday, saturday } => {
                if weekday == 0 || saturday == 0 {
                    return Err(ConfigError::ZeroTopN);
                }
            }
            Strategy::AmPmSplit => {}
        }
        Ok(())
    }
}
