//! `data-explorer` loads a CSV file into an in-memory [`types::DataSet`], reports on it, fills its
//! missing values, draws standard plots, and writes it back out.
//!
//! ## Stages
//!
//! - [`ingestion`]: parse a comma-separated file with a header row, inferring one
//!   [`types::DataType`] per column. An absent file is a [`ingestion::LoadOutcome::FileAbsent`],
//!   not an error.
//! - [`profiling`]: shape, preview, missing counts, data types, `describe`-style statistics for
//!   numeric columns, and value frequencies for categorical columns.
//! - [`processing`]: fill missing entries with the column mean (numeric) or mode (categorical),
//!   plus simple column reductions.
//! - [`visualization`]: correlation heatmap, histograms, and a boxplot as SVG files.
//! - [`export`]: write the dataset back to CSV. Failures come back as
//!   [`export::ExportOutcome::Failed`].
//! - [`pipeline`]: the two end-to-end runs used by the `data-explorer` and `quick-summary`
//!   binaries.
//!
//! Missing entries are [`types::Value::Null`] throughout: empty cells and the usual textual
//! markers (`NA`, `NaN`, `null`, ...) on input, empty fields on output.
//!
//! ## Quick example
//!
//! ```no_run
//! use data_explorer::ingestion::{load_csv, LoadOptions};
//! use data_explorer::processing::fill_missing;
//!
//! # fn main() -> Result<(), data_explorer::DataError> {
//! let outcome = load_csv("input_dataset.csv", &LoadOptions::default())?;
//! if let Some(mut ds) = outcome.into_dataset() {
//!     let summary = fill_missing(&mut ds);
//!     println!("filled {} cells in {} rows", summary.filled_cells(), ds.row_count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the whole pipeline
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use data_explorer::observability::StdErrObserver;
//! use data_explorer::pipeline::{run_explore, PipelineOptions};
//!
//! # fn main() -> Result<(), data_explorer::DataError> {
//! let options = PipelineOptions {
//!     report_json: Some("report.json".into()),
//!     observer: Some(Arc::new(StdErrObserver)),
//!     ..PipelineOptions::default()
//! };
//! run_explore(&options, &mut std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod ingestion;
pub mod observability;
pub mod pipeline;
pub mod processing;
pub mod profiling;
pub mod types;
pub mod visualization;

pub use error::{DataError, DataResult};
