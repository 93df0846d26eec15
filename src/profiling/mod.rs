//! Descriptive statistics for a [`crate::types::DataSet`].
//!
//! [`build_report`] computes a [`DatasetReport`] (shape, preview, missing counts, data types,
//! numeric `describe` statistics, categorical value frequencies) without touching the dataset.
//! [`dataset_details`] renders it as text; [`quick_summary`] prints the shorter
//! sum/average/min/max overview.
//!
//! Both printers accept `Option<&DataSet>`: with no dataset they write a single diagnostic line
//! and do no work.
//!
//! ```rust
//! use data_explorer::profiling::{build_report, DEFAULT_PREVIEW_ROWS};
//! use data_explorer::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![Field::new("score", DataType::Float64)]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![vec![Value::Float64(1.0)], vec![Value::Null], vec![Value::Float64(3.0)]],
//! );
//! let report = build_report(&ds, DEFAULT_PREVIEW_ROWS);
//! assert_eq!(report.missing[0].count, 1);
//! assert_eq!(report.numeric[0].mean, 2.0);
//! ```

pub mod report;
pub mod summary;
mod table;

pub use report::{
    build_report, dataset_details, quick_summary, ColumnCount, ColumnType, DatasetReport,
    DEFAULT_PREVIEW_ROWS, NO_DATA_MESSAGE,
};
pub use summary::{quantile_sorted, FrequencyTable, NumericSummary, ValueCount};
