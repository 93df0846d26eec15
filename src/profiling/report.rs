//! Dataset-level report assembly and rendering.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::DataResult;
use crate::processing::{reduce, ReduceOp};
use crate::types::{ColumnKind, DataSet, DataType, Value};

use super::summary::{FrequencyTable, NumericSummary};
use super::table::{preview_cell, render_grid, render_series, stat_cell};

/// Line written instead of a report when there is no dataset.
pub const NO_DATA_MESSAGE: &str = "No data to display details.";

/// Number of rows shown in a preview unless configured otherwise.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// A column name paired with a count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCount {
    pub column: String,
    pub count: usize,
}

/// A column name paired with its data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnType {
    pub column: String,
    pub data_type: DataType,
}

/// Everything the descriptive report shows, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    /// First rows of the dataset.
    pub preview: Vec<Vec<Value>>,
    /// Total number of cells (rows × columns).
    pub size: usize,
    pub missing: Vec<ColumnCount>,
    pub dtypes: Vec<ColumnType>,
    /// One entry per numeric column; empty when there are none.
    pub numeric: Vec<NumericSummary>,
    /// One entry per categorical column; empty when there are none.
    pub categorical: Vec<FrequencyTable>,
}

impl DatasetReport {
    /// Pretty-printed JSON form of the report. Undefined statistics become `null`.
    pub fn to_json(&self) -> DataResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute the full descriptive report. Does not modify `dataset`.
pub fn build_report(dataset: &DataSet, preview_rows: usize) -> DatasetReport {
    let fields = &dataset.schema.fields;

    let numeric = dataset
        .schema
        .indexes_of_kind(ColumnKind::Numeric)
        .into_iter()
        .map(|idx| NumericSummary::from_values(fields[idx].name.as_str(), &dataset.numeric_values(idx)))
        .collect();
    let categorical = dataset
        .schema
        .indexes_of_kind(ColumnKind::Categorical)
        .into_iter()
        .map(|idx| FrequencyTable::for_column(dataset, idx))
        .collect();

    DatasetReport {
        rows: dataset.row_count(),
        columns: dataset.column_count(),
        column_names: dataset.schema.field_names().map(str::to_owned).collect(),
        preview: dataset.head(preview_rows).to_vec(),
        size: dataset.size(),
        missing: fields
            .iter()
            .enumerate()
            .map(|(idx, f)| ColumnCount {
                column: f.name.clone(),
                count: dataset.null_count(idx),
            })
            .collect(),
        dtypes: fields
            .iter()
            .map(|f| ColumnType {
                column: f.name.clone(),
                data_type: f.data_type,
            })
            .collect(),
        numeric,
        categorical,
    }
}

/// Write the descriptive report for `dataset` to `out`.
///
/// With no dataset, writes the single line [`NO_DATA_MESSAGE`] and computes nothing.
pub fn dataset_details<W: Write>(
    dataset: Option<&DataSet>,
    preview_rows: usize,
    out: &mut W,
) -> DataResult<Option<DatasetReport>> {
    let Some(dataset) = dataset else {
        writeln!(out, "{NO_DATA_MESSAGE}")?;
        return Ok(None);
    };

    let report = build_report(dataset, preview_rows);
    write!(out, "{report}")?;
    Ok(Some(report))
}

/// Write the short summary: shape, preview, size, missing counts, then sum / average / minimum /
/// maximum of every numeric column.
///
/// With no dataset, writes the single line [`NO_DATA_MESSAGE`].
pub fn quick_summary<W: Write>(dataset: Option<&DataSet>, preview_rows: usize, out: &mut W) -> DataResult<()> {
    let Some(dataset) = dataset else {
        writeln!(out, "{NO_DATA_MESSAGE}")?;
        return Ok(());
    };

    writeln!(out, "Number of Rows: {}", dataset.row_count())?;
    writeln!(out, "Number of Columns: {}", dataset.column_count())?;
    let preview = dataset.head(preview_rows);
    write!(
        out,
        "\nFirst {} rows:\n{}",
        preview.len(),
        render_preview(dataset.schema.field_names(), preview)
    )?;
    writeln!(out, "\nDataset Size: {}", dataset.size())?;
    write!(out, "\nMissing Values in Each Column:\n{}", render_missing(dataset))?;

    let numeric: Vec<&str> = dataset
        .schema
        .indexes_of_kind(ColumnKind::Numeric)
        .into_iter()
        .map(|idx| dataset.schema.fields[idx].name.as_str())
        .collect();
    for (title, op) in [
        ("Sum", ReduceOp::Sum),
        ("Average", ReduceOp::Mean),
        ("Minimum Values", ReduceOp::Min),
        ("Maximum Values", ReduceOp::Max),
    ] {
        let series = numeric.iter().map(|&name| {
            let value = match (op, reduce(dataset, name, op)) {
                // Sum over no values is zero, as in `NumericSummary::sum`.
                (ReduceOp::Sum, None | Some(Value::Null)) => Value::Float64(0.0),
                (_, value) => value.unwrap_or(Value::Null),
            };
            (name, preview_cell(&value))
        });
        write!(out, "\n{title} of Numerical Columns:\n{}", render_series(series))?;
    }
    Ok(())
}

fn render_preview<'a>(names: impl Iterator<Item = &'a str>, rows: &[Vec<Value>]) -> String {
    let header: Vec<String> = std::iter::once(String::new())
        .chain(names.map(str::to_owned))
        .collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            std::iter::once(i.to_string())
                .chain(row.iter().map(preview_cell))
                .collect()
        })
        .collect();
    render_grid(&header, &rows)
}

fn render_missing(dataset: &DataSet) -> String {
    render_series(
        dataset
            .schema
            .field_names()
            .enumerate()
            .map(|(idx, name)| (name, dataset.null_count(idx))),
    )
}

fn render_describe(summaries: &[NumericSummary]) -> String {
    let header: Vec<String> = std::iter::once(String::new())
        .chain(summaries.iter().map(|s| s.column.clone()))
        .collect();
    let stat_rows: [(&str, fn(&NumericSummary) -> f64); 8] = [
        ("count", |s: &NumericSummary| s.count as f64),
        ("mean", |s: &NumericSummary| s.mean),
        ("std", |s: &NumericSummary| s.std),
        ("min", |s: &NumericSummary| s.min),
        ("25%", |s: &NumericSummary| s.q1),
        ("50%", |s: &NumericSummary| s.median),
        ("75%", |s: &NumericSummary| s.q3),
        ("max", |s: &NumericSummary| s.max),
    ];
    let rows: Vec<Vec<String>> = stat_rows
        .iter()
        .map(|(label, get)| {
            std::iter::once((*label).to_string())
                .chain(summaries.iter().map(|s| stat_cell(get(s))))
                .collect()
        })
        .collect();
    render_grid(&header, &rows)
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Dataset Overview ---\n")?;
        writeln!(f, "Number of Rows: {}", self.rows)?;
        writeln!(f, "Number of Columns: {}", self.columns)?;

        write!(
            f,
            "\nFirst {} rows:\n{}",
            self.preview.len(),
            render_preview(self.column_names.iter().map(String::as_str), &self.preview)
        )?;

        writeln!(f, "\nDataset Size: {}", self.size)?;
        write!(
            f,
            "\nMissing Values in Each Column:\n{}",
            render_series(self.missing.iter().map(|c| (c.column.as_str(), c.count)))
        )?;
        write!(
            f,
            "\nData Types of Each Column:\n{}",
            render_series(self.dtypes.iter().map(|c| (c.column.as_str(), c.data_type)))
        )?;

        writeln!(f, "\n--- Statistical Summary of Numerical Columns ---")?;
        if !self.numeric.is_empty() {
            f.write_str(&render_describe(&self.numeric))?;
        }

        writeln!(f, "\n--- Unique Values in Categorical Columns ---")?;
        for table in &self.categorical {
            write!(
                f,
                "\nColumn '{}':\n{}",
                table.column,
                render_series(table.counts.iter().map(|c| (c.value.as_str(), c.count)))
            )?;
        }
        Ok(())
    }
}
