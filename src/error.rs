//! Run-level error taxonomy.
//!
//! Only two failures abort a run: a grid with no recognizable arrival
//! table, and configuration rejected by eager validation. Cell-level parse
//! problems are recovered inside the normalizer (bad times drop the row,
//! bad counts coerce to zero) and a missing end-marker row falls back to a
//! fixed row bound — none of those surface here.

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal errors for one analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No row in the grid carried the table's header signature (a cell
    /// reading `Time` alongside a cell reading `Sunday`). The upload is
    /// most likely not an arrival-pattern export, or the export format
    /// has changed.
    #[error("could not locate the arrival table: no row contains both \"Time\" and \"Sunday\"")]
    TableNotFound,

    /// The located table lost its `Time` column between location and
    /// normalization — a malformed grid shape the pipeline does not try
    /// to repair.
    #[error("located table has no \"Time\" column")]
    MissingTimeColumn,

    /// The run's configuration failed eager validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
