//! Missing-value normalization: mean for numeric columns, mode for categorical columns.
//!
//! [`fill_missing`] mutates the dataset in place and never changes its shape or column order.
//! Each column is handled independently. A column with no non-missing entries has no mean and no
//! mode, so it is left missing. Running it twice is a no-op the second time.

use serde::Serialize;

use crate::types::{ColumnKind, DataSet, DataType, Value};

use super::frequency::value_counts;

/// How missing entries of a column are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImputationRule {
    /// Mean of the non-missing entries (numeric columns).
    Mean,
    /// Most frequent non-missing value (categorical columns).
    Mode,
}

/// What happened to one column during [`fill_missing`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnImputation {
    pub column: String,
    pub rule: ImputationRule,
    /// Value written into missing cells, or `Null` if none could be computed.
    pub fill: Value,
    /// Number of cells filled.
    pub filled: usize,
}

/// Per-column outcome of [`fill_missing`]; only columns that had missing entries are listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImputationSummary {
    pub columns: Vec<ColumnImputation>,
}

impl ImputationSummary {
    /// Total number of cells filled across all columns.
    pub fn filled_cells(&self) -> usize {
        self.columns.iter().map(|c| c.filled).sum()
    }

    /// Columns that had missing entries but nothing to fill them with.
    pub fn unfilled_columns(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.fill.is_null())
            .map(|c| c.column.as_str())
    }
}

/// Mean of the non-missing numeric entries of a column; `None` if there are none.
pub fn column_mean(dataset: &DataSet, idx: usize) -> Option<f64> {
    let values = dataset.numeric_values(idx);
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Most frequent non-missing value of a column; ties go to the value seen first.
pub fn column_mode(dataset: &DataSet, idx: usize) -> Option<Value> {
    value_counts(dataset, idx).into_iter().next().map(|(v, _)| v)
}

/// Replace missing entries in place: numeric columns get the column mean, categorical columns
/// get the column mode.
///
/// An `Int64` column that has missing entries is converted to `Float64` before filling, since
/// its mean is generally fractional.
pub fn fill_missing(dataset: &mut DataSet) -> ImputationSummary {
    let mut summary = ImputationSummary::default();

    for idx in 0..dataset.column_count() {
        let missing = dataset.null_count(idx);
        if missing == 0 {
            continue;
        }

        let column = dataset.schema.fields[idx].name.clone();
        let data_type = dataset.schema.fields[idx].data_type;
        let (rule, fill) = match data_type.kind() {
            ColumnKind::Numeric => {
                let fill = column_mean(dataset, idx).map(Value::Float64);
                if fill.is_some() && data_type == DataType::Int64 {
                    promote_to_float(dataset, idx);
                }
                (ImputationRule::Mean, fill)
            }
            ColumnKind::Categorical => (ImputationRule::Mode, column_mode(dataset, idx)),
            ColumnKind::Unknown => continue,
        };

        let filled = match &fill {
            Some(value) => replace_nulls(dataset, idx, value),
            None => 0,
        };
        summary.columns.push(ColumnImputation {
            column,
            rule,
            fill: fill.unwrap_or(Value::Null),
            filled,
        });
    }

    summary
}

fn promote_to_float(dataset: &mut DataSet, idx: usize) {
    dataset.schema.fields[idx].data_type = DataType::Float64;
    for row in &mut dataset.rows {
        if let Some(cell) = row.get_mut(idx) {
            if let Value::Int64(v) = *cell {
                *cell = Value::Float64(v as f64);
            }
        }
    }
}

fn replace_nulls(dataset: &mut DataSet, idx: usize, fill: &Value) -> usize {
    let mut filled = 0;
    for row in &mut dataset.rows {
        if let Some(cell) = row.get_mut(idx) {
            if cell.is_null() {
                *cell = fill.clone();
                filled += 1;
            }
        }
    }
    filled
}
