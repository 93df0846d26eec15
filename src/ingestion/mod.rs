//! Loading delimited files into an in-memory [`DataSet`].
//!
//! Most callers should use [`load_csv`], which:
//!
//! - parses a comma-separated file whose first row is the header
//! - infers one [`crate::types::DataType`] per column (see [`infer`])
//! - returns [`LoadOutcome::FileAbsent`] instead of an error when the file does not exist
//!
//! When the column types are known up front, [`csv::load_csv_with_schema`] parses against a
//! caller-provided [`crate::types::Schema`] instead of inferring.

pub mod csv;
pub mod infer;

use std::fmt;
use std::path::PathBuf;

use crate::types::DataSet;

pub use self::csv::{load_csv, load_csv_from_reader, load_csv_with_schema};
pub use infer::infer_data_type;

/// Null markers recognized by default, matching what common dataframe readers treat as missing.
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Result of [`load_csv`].
///
/// A missing input file is an anticipated condition, so it is a variant rather than an error;
/// callers must check for it before using the dataset.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The file was parsed.
    Loaded(DataSet),
    /// Nothing exists at `path`.
    FileAbsent { path: PathBuf },
}

impl LoadOutcome {
    /// The loaded dataset, or `None` for [`LoadOutcome::FileAbsent`].
    pub fn into_dataset(self) -> Option<DataSet> {
        match self {
            LoadOutcome::Loaded(ds) => Some(ds),
            LoadOutcome::FileAbsent { .. } => None,
        }
    }

    /// Returns `true` for [`LoadOutcome::FileAbsent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, LoadOutcome::FileAbsent { .. })
    }
}

/// Options controlling CSV loading.
///
/// Use [`Default`] for common cases (comma delimiter, [`DEFAULT_NULL_MARKERS`]).
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Cell contents (after trimming) treated as missing.
    pub null_markers: Vec<String>,
}

impl LoadOptions {
    /// Returns `true` if the trimmed cell is one of the configured null markers.
    pub fn is_null_marker(&self, trimmed: &str) -> bool {
        self.null_markers.iter().any(|m| m == trimmed)
    }

    pub(crate) fn reader_builder(&self) -> ::csv::ReaderBuilder {
        let mut builder = ::csv::ReaderBuilder::new();
        builder.has_headers(true).delimiter(self.delimiter);
        builder
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("null_markers_len", &self.null_markers.len())
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
