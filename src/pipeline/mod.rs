//! The analysis pipeline.
//!
//! One synchronous, stateless pass per uploaded report:
//!
//! 1. Validate the configuration (eagerly — before touching the grid).
//! 2. Locate the arrival table inside the raw grid.
//! 3. Normalize it into long-form (day, slot, count) records.
//! 4. Adjust counts for the reporting period, then aggregate to the
//!    requested granularity.
//! 5. Select peak slots under the configured strategy.
//! 6. Merge contiguous peaks into shift blocks and lay them onto the
//!    seven-day schedule.
//!
//! Nothing is cached or shared between runs; every stage is a pure
//! function of its input.

pub mod locate;
pub mod merge;
pub mod normalize;
pub mod select;
pub mod transform;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::models::RawGrid;
use crate::report::WeekSchedule;

/// Result of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// The seven-day staffing schedule.
    pub schedule: WeekSchedule,
    /// The data-derived trigger value, present when the percentile
    /// strategy computed one (for display alongside the schedule).
    pub computed_threshold: Option<f64>,
}

/// Runs the full pipeline over one uploaded report.
///
/// # Errors
/// [`AnalysisError::Config`] if the configuration is invalid,
/// [`AnalysisError::TableNotFound`] if the grid holds no recognizable
/// arrival table. Cell-level problems are recovered internally.
///
/// # Example
/// ```
/// use power_hours::config::{AnalysisConfig, Strategy};
/// use power_hours::models::{Cell, RawGrid};
/// use power_hours::pipeline::analyze;
///
/// let grid = RawGrid::new(vec![
///     vec!["Time", "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
///         .into_iter().map(Cell::from).collect(),
///     vec![Cell::from("07:00"), Cell::from(0), Cell::from(12), Cell::from(0),
///          Cell::from(0), Cell::from(0), Cell::from(0), Cell::from(0)],
/// ]);
/// let config = AnalysisConfig::new(Strategy::FixedThreshold { threshold: 10.0 });
///
/// let report = analyze(&grid, &config).unwrap();
/// assert_eq!(
///     report.schedule.day(power_hours::models::Day::Monday).coverage_line(),
///     "07:00-07:30 (Peak: 12)"
/// );
/// ```
pub fn analyze(grid: &RawGrid, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    config.validate()?;

    let table = locate::locate_table(grid)?;
    let records = normalize::normalize(&table)?;
    let records = transform::adjust_for_period(records, config.period_divisor);
    let records = transform::aggregate(records, config.granularity);
    let selection = select::select_peaks(&records, &config.strategy);
    let blocks = merge::merge_week(&selection.peaks, config.granularity);

    Ok(AnalysisReport {
        schedule: WeekSchedule::from_blocks(blocks),
        computed_threshold: selection.computed_threshold,
    })
}
