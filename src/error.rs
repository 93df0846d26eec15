use thiserror::Error;

/// Convenience result type used across the crate.
pub type DataResult<T> = Result<T, DataError>;

/// Error type returned by loading, exporting, reporting and rendering.
///
/// Only two failure modes are recovered locally (a missing input file and a failed export, see
/// [`crate::ingestion::LoadOutcome`] and [`crate::export::ExportOutcome`]). Everything else is
/// surfaced as a `DataError` and is expected to terminate the run.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying I/O error (permission denied, invalid path, disk full, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error (malformed input, ragged rows, ...).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The plotting backend failed to draw or write an artifact.
    #[error("plot error: {0}")]
    Plot(String),

    /// The input does not conform to the provided schema (missing columns, wrong arity, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

impl DataError {
    pub(crate) fn plot(e: impl std::fmt::Display) -> Self {
        Self::Plot(e.to_string())
    }
}
