//! Power-hour analysis for donor arrival reports.
//!
//! Turns a weekly (or 4-week-rolled-up) arrival report — a time-of-day ×
//! day-of-week grid buried somewhere inside an arbitrary spreadsheet —
//! into "power hour" windows: contiguous intervals whose arrival volume
//! warrants extra staffing.
//!
//! # Modules
//!
//! - **`models`**: domain types — `RawGrid`, `DataTable`, `ArrivalRecord`,
//!   `ShiftBlock`, and the day/time primitives
//! - **`config`**: per-run configuration and the strategy enumeration
//! - **`pipeline`**: the locate → normalize → adjust → select → merge
//!   transform, entered through [`pipeline::analyze`]
//! - **`report`**: the seven-day schedule handed to presentation layers
//! - **`io`**: CSV ingestion for hosts without a materialized grid
//!
//! # Architecture
//!
//! Every stage is a pure, synchronous function of its input; a run owns
//! its grid and derived relations exclusively and nothing persists
//! between runs. Peak selection is one step parameterized by a
//! [`Strategy`](config::Strategy) value rather than separate per-strategy
//! pipelines.
//!
//! # Example
//!
//! ```no_run
//! use power_hours::config::{AnalysisConfig, Strategy};
//! use power_hours::{analyze, io};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = io::load_csv("arrival_patterns.csv")?;
//! let config = AnalysisConfig::new(Strategy::FixedThreshold { threshold: 10.0 })
//!     .with_period_divisor(4);
//!
//! let report = analyze(&grid, &config)?;
//! for day in &report.schedule.days {
//!     println!("{}: {}", day.day, day.coverage_line());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod report;

pub use config::{AnalysisConfig, ConfigError, Strategy};
pub use error::AnalysisError;
pub use pipeline::{analyze, AnalysisReport};
pub use report::{DaySchedule, WeekSchedule};
