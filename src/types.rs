//! Core data model types.
//!
//! A dataset is loaded into an in-memory [`DataSet`]: a [`Schema`] (a list of typed [`Field`]s)
//! plus row-major [`Value`] storage. Each field carries a [`DataType`] decided once at load time;
//! [`DataType::kind`] maps it onto the [`ColumnKind`] used to dispatch statistics and imputation.

use std::fmt;

use serde::Serialize;

use crate::error::{DataError, DataResult};

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
    /// No value was ever observed for this column, so no type could be inferred.
    Unknown,
}

impl DataType {
    /// Classify the type for statistics and imputation.
    pub fn kind(self) -> ColumnKind {
        match self {
            DataType::Int64 | DataType::Float64 => ColumnKind::Numeric,
            DataType::Bool | DataType::Utf8 => ColumnKind::Categorical,
            DataType::Unknown => ColumnKind::Unknown,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Int64 => "int64",
            DataType::Float64 => "float64",
            DataType::Bool => "bool",
            DataType::Utf8 => "object",
            DataType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Per-column classification used by the reporter and the missing-value normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Mean/std/quartiles apply; missing entries are filled with the mean.
    Numeric,
    /// Value frequencies apply; missing entries are filled with the mode.
    Categorical,
    /// Entirely missing column of undetermined type.
    Unknown,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A list of fields describing the shape of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Indexes of fields whose type is of the given kind, in schema order.
    pub fn indexes_of_kind(&self, kind: ColumnKind) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.data_type.kind() == kind)
            .map(|(i, _)| i)
            .collect()
    }
}

/// A single typed value in a [`DataSet`].
///
/// Serializes untagged, so `Null` becomes JSON `null` and numbers stay numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing entry.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns `true` for a missing entry.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value (`Int64` widened to `f64`).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }
}

/// Text form used in previews and CSV output.
///
/// Floats always keep a fractional part (`2.0`, not `2`) so they reload as floats; `Null`
/// renders as the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v:?}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Utf8(s) => f.write_str(s),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows without validation.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Create a dataset, checking that names are unique and every row matches the schema arity.
    pub fn try_new(schema: Schema, rows: Vec<Vec<Value>>) -> DataResult<Self> {
        for (i, field) in schema.fields.iter().enumerate() {
            if schema.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(DataError::SchemaMismatch {
                    message: format!("duplicate column name '{}'", field.name),
                });
            }
        }
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != schema.len())
        {
            return Err(DataError::SchemaMismatch {
                message: format!(
                    "row {idx} has {} values, schema has {} fields",
                    row.len(),
                    schema.len()
                ),
            });
        }
        Ok(Self { schema, rows })
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Total number of cells (rows × columns).
    pub fn size(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// The first `n` rows (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> &[Vec<Value>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Iterate the values of one column, top to bottom.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(move |row| row.get(idx))
    }

    /// Non-missing numeric values of one column, as `f64`.
    pub fn numeric_values(&self, idx: usize) -> Vec<f64> {
        self.column_values(idx).filter_map(Value::as_f64).collect()
    }

    /// Number of missing entries in one column.
    pub fn null_count(&self, idx: usize) -> usize {
        self.column_values(idx).filter(|v| v.is_null()).count()
    }

    /// Total number of missing entries across all columns.
    pub fn total_null_count(&self) -> usize {
        (0..self.column_count()).map(|i| self.null_count(i)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("a", DataType::Float64),
            Field::new("b", DataType::Utf8),
        ]);
        DataSet::new(
            schema,
            vec![
                vec![Value::Float64(1.0), Value::Utf8("x".to_string())],
                vec![Value::Null, Value::Utf8("x".to_string())],
                vec![Value::Float64(3.0), Value::Null],
            ],
        )
    }

    #[test]
    fn shape_and_size() {
        let ds = sample();
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.column_count(), 2);
        assert_eq!(ds.size(), 6);
        assert_eq!(ds.head(5).len(), 3);
        assert_eq!(ds.head(2).len(), 2);
    }

    #[test]
    fn null_counts_per_column() {
        let ds = sample();
        assert_eq!(ds.null_count(0), 1);
        assert_eq!(ds.null_count(1), 1);
        assert_eq!(ds.total_null_count(), 2);
        assert_eq!(ds.numeric_values(0), vec![1.0, 3.0]);
    }

    #[test]
    fn kinds_follow_data_types() {
        assert_eq!(DataType::Int64.kind(), ColumnKind::Numeric);
        assert_eq!(DataType::Float64.kind(), ColumnKind::Numeric);
        assert_eq!(DataType::Utf8.kind(), ColumnKind::Categorical);
        assert_eq!(DataType::Bool.kind(), ColumnKind::Categorical);
        assert_eq!(DataType::Unknown.kind(), ColumnKind::Unknown);

        let ds = sample();
        assert_eq!(ds.schema.indexes_of_kind(ColumnKind::Numeric), vec![0]);
        assert_eq!(ds.schema.indexes_of_kind(ColumnKind::Categorical), vec![1]);
    }

    #[test]
    fn float_display_keeps_fraction() {
        assert_eq!(Value::Float64(2.0).to_string(), "2.0");
        assert_eq!(Value::Float64(0.25).to_string(), "0.25");
        assert_eq!(Value::Int64(7).to_string(), "7");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn try_new_rejects_duplicate_names_and_ragged_rows() {
        let dup = Schema::new(vec![
            Field::new("a", DataType::Int64),
            Field::new("a", DataType::Int64),
        ]);
        let err = DataSet::try_new(dup, vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate column name 'a'"));

        let schema = Schema::new(vec![Field::new("a", DataType::Int64)]);
        let err = DataSet::try_new(schema, vec![vec![Value::Int64(1), Value::Int64(2)]]).unwrap_err();
        assert!(err.to_string().contains("row 0 has 2 values"));
    }
}
