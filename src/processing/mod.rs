//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//!
//! Currently implemented:
//!
//! - [`fill_missing()`]: in-place missing-value normalization (mean / mode)
//! - [`reduce()`]: common single-column reductions (count/sum/mean/min/max)
//! - [`value_counts()`]: distinct-value frequencies of a column
//!
//! ## Example: normalize → reduce
//!
//! ```rust
//! use data_explorer::processing::{fill_missing, reduce, ReduceOp};
//! use data_explorer::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("a", DataType::Float64),
//!     Field::new("b", DataType::Utf8),
//! ]);
//! let mut ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Float64(1.0), Value::Utf8("x".to_string())],
//!         vec![Value::Null, Value::Utf8("x".to_string())],
//!         vec![Value::Float64(3.0), Value::Null],
//!     ],
//! );
//!
//! let summary = fill_missing(&mut ds);
//! assert_eq!(summary.filled_cells(), 2);
//! assert_eq!(ds.rows[1][0], Value::Float64(2.0));
//! assert_eq!(ds.rows[2][1], Value::Utf8("x".to_string()));
//!
//! let sum = reduce(&ds, "a", ReduceOp::Sum).unwrap();
//! assert_eq!(sum, Value::Float64(6.0));
//! ```

pub mod frequency;
pub mod impute;
pub mod reduce;

pub use frequency::value_counts;
pub use impute::{column_mean, column_mode, fill_missing, ColumnImputation, ImputationRule, ImputationSummary};
pub use reduce::{reduce, ReduceOp};
