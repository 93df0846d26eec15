//! Reduction operations for [`crate::types::DataSet`].

use crate::types::{DataSet, DataType, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows (including nulls).
    Count,
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Arithmetic mean of numeric values, ignoring nulls. Always a `Float64`.
    Mean,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - For `Sum`/`Mean`/`Min`/`Max`, returns `Some(Value::Null)` if there are no non-null values
///   or the column is not numeric.
/// - For `Count`, always returns `Some(Value::Int64(row_count))`.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> Option<Value> {
    let idx = dataset.schema.index_of(column)?;
    let data_type = dataset.schema.fields[idx].data_type;

    match op {
        ReduceOp::Count => Some(Value::Int64(dataset.row_count() as i64)),
        ReduceOp::Mean => Some(mean(dataset, idx).map(Value::Float64).unwrap_or(Value::Null)),
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => {
            Some(reduce_numeric_typed(dataset, idx, data_type, op))
        }
    }
}

fn mean(dataset: &DataSet, idx: usize) -> Option<f64> {
    let (sum, n) = dataset
        .column_values(idx)
        .filter_map(Value::as_f64)
        .fold((0.0_f64, 0_usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn reduce_numeric_typed(dataset: &DataSet, idx: usize, data_type: DataType, op: ReduceOp) -> Value {
    match data_type {
        DataType::Int64 => {
            let mut acc: Option<i64> = None;
            for v in dataset.column_values(idx) {
                if let Value::Int64(v) = v {
                    acc = Some(match (op, acc) {
                        (ReduceOp::Sum, Some(a)) => a.saturating_add(*v),
                        (ReduceOp::Min, Some(a)) => a.min(*v),
                        (ReduceOp::Max, Some(a)) => a.max(*v),
                        (_, _) => *v,
                    });
                }
            }
            acc.map(Value::Int64).unwrap_or(Value::Null)
        }
        DataType::Float64 => {
            let mut acc: Option<f64> = None;
            for v in dataset.column_values(idx) {
                if let Value::Float64(v) = v {
                    acc = Some(match (op, acc) {
                        (ReduceOp::Sum, Some(a)) => a + v,
                        (ReduceOp::Min, Some(a)) => a.min(*v),
                        (ReduceOp::Max, Some(a)) => a.max(*v),
                        (_, _) => *v,
                    });
                }
            }
            acc.map(Value::Float64).unwrap_or(Value::Null)
        }
        _ => Value::Null,
    }
}
