//! Writing a [`DataSet`] back to CSV.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{DataError, DataResult};
use crate::types::DataSet;

/// Result of [`export_csv`].
///
/// Export failures are reported, not propagated: the run continues after a failed export.
#[must_use]
#[derive(Debug)]
pub enum ExportOutcome {
    /// The file was written (any previous content replaced).
    Written { path: PathBuf, rows: usize },
    /// Writing failed; `cause` is the underlying error.
    Failed { path: PathBuf, cause: DataError },
}

impl ExportOutcome {
    /// Returns `true` for [`ExportOutcome::Written`].
    pub fn is_written(&self) -> bool {
        matches!(self, ExportOutcome::Written { .. })
    }
}

/// Write `dataset` to `path` as CSV: header row, no index column, missing entries as empty fields.
pub fn export_csv(dataset: &DataSet, path: impl AsRef<Path>) -> ExportOutcome {
    let path = path.as_ref();
    let result = File::create(path)
        .map_err(DataError::from)
        .and_then(|file| write_csv(dataset, file));

    match result {
        Ok(()) => ExportOutcome::Written {
            path: path.to_path_buf(),
            rows: dataset.row_count(),
        },
        Err(cause) => ExportOutcome::Failed {
            path: path.to_path_buf(),
            cause,
        },
    }
}

/// Write `dataset` as CSV into any writer.
pub fn write_csv<W: io::Write>(dataset: &DataSet, writer: W) -> DataResult<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(dataset.schema.field_names())?;
    let mut record: Vec<String> = Vec::with_capacity(dataset.column_count());
    for row in &dataset.rows {
        record.clear();
        record.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}
