//! CSV loading implementation.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{DataError, DataResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::infer::{infer_data_type, parse_typed_value};
use super::{LoadOptions, LoadOutcome};

/// Load a CSV file into an in-memory [`DataSet`], inferring column types.
///
/// Rules:
///
/// - The first row is the header; duplicate names get a `.1`, `.2`, ... suffix.
/// - A cell whose trimmed text matches a null marker becomes [`Value::Null`]. Text cells keep
///   their surrounding whitespace; numbers and booleans are parsed from the trimmed text.
/// - A missing file yields [`LoadOutcome::FileAbsent`]. Any other failure (permissions, ragged
///   rows, malformed quoting) is returned as an error.
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> DataResult<LoadOutcome> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(LoadOutcome::FileAbsent {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let mut rdr = options.reader_builder().from_reader(file);
    load_csv_from_reader(&mut rdr, options).map(LoadOutcome::Loaded)
}

/// Load CSV data from an existing CSV reader, inferring column types.
pub fn load_csv_from_reader<R: io::Read>(
    rdr: &mut csv::Reader<R>,
    options: &LoadOptions,
) -> DataResult<DataSet> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(DataError::SchemaMismatch {
            message: "input has no header row".to_string(),
        });
    }
    let names = dedupe_headers(headers.iter());

    // Column-major cells; `None` marks a missing entry.
    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for result in rdr.records() {
        let record = result?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            if options.is_null_marker(raw.trim()) {
                column.push(None);
            } else {
                column.push(Some(raw.to_owned()));
            }
        }
    }

    let fields: Vec<Field> = names
        .into_iter()
        .zip(columns.iter())
        .map(|(name, cells)| {
            let data_type = infer_data_type(cells.iter().map(|c| c.as_deref()));
            Field::new(name, data_type)
        })
        .collect();

    let row_count = columns.first().map_or(0, Vec::len);
    let mut rows: Vec<Vec<Value>> = (0..row_count)
        .map(|_| Vec::with_capacity(fields.len()))
        .collect();
    for (field, cells) in fields.iter().zip(columns.iter()) {
        for (row_idx0, cell) in cells.iter().enumerate() {
            let value = match cell {
                None => Value::Null,
                // +2: 1-based, and the header is line 1.
                Some(raw) => parse_typed_value(row_idx0 + 2, &field.name, field.data_type, raw)?,
            };
            rows[row_idx0].push(value);
        }
    }

    Ok(DataSet::new(Schema::new(fields), rows))
}

/// Load CSV data against a caller-provided schema instead of inferring types.
///
/// Rules:
///
/// - Headers must contain all schema fields (order can differ; extra columns are ignored).
/// - Each non-missing value is parsed according to the schema field type.
pub fn load_csv_with_schema<R: io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
    options: &LoadOptions,
) -> DataResult<DataSet> {
    let headers = rdr.headers()?.clone();

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = Vec::with_capacity(schema.len());
    for field in &schema.fields {
        match headers.iter().position(|h| h.trim() == field.name) {
            Some(idx) => col_idxs.push(idx),
            None => {
                return Err(DataError::SchemaMismatch {
                    message: format!(
                        "missing required column '{field}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>(),
                        field = field.name
                    ),
                });
            }
        }
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let user_row = row_idx0 + 2;
        let record = result?;

        let mut row: Vec<Value> = Vec::with_capacity(schema.len());
        for (field, &csv_idx) in schema.fields.iter().zip(col_idxs.iter()) {
            let raw = record.get(csv_idx).unwrap_or("");
            if options.is_null_marker(raw.trim()) {
                row.push(Value::Null);
            } else {
                row.push(parse_typed_value(user_row, &field.name, field.data_type, raw)?);
            }
        }
        rows.push(row);
    }

    DataSet::try_new(schema.clone(), rows)
}

fn dedupe_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let originals: Vec<String> = headers.map(str::to_owned).collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(originals.len());
    let mut out = Vec::with_capacity(originals.len());

    for name in &originals {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(input: &str) -> DataResult<DataSet> {
        let options = LoadOptions::default();
        let mut rdr = options.reader_builder().from_reader(input.as_bytes());
        load_csv_from_reader(&mut rdr, &options)
    }

    #[test]
    fn infers_types_and_nulls() {
        let ds = load_str("a,b,c\n1,x,true\n,x,\n3,,false\n").unwrap();
        let types: Vec<DataType> = ds.schema.fields.iter().map(|f| f.data_type).collect();
        assert_eq!(types, vec![DataType::Float64, DataType::Utf8, DataType::Bool]);
        assert_eq!(ds.rows[0][0], Value::Float64(1.0));
        assert_eq!(ds.rows[1][0], Value::Null);
        assert_eq!(ds.rows[2][1], Value::Null);
        assert_eq!(ds.rows[2][2], Value::Bool(false));
    }

    #[test]
    fn null_markers_are_missing() {
        let ds = load_str("a,b\nNA,hello\n2,null\n").unwrap();
        assert_eq!(ds.rows[0][0], Value::Null);
        assert_eq!(ds.rows[1][1], Value::Null);
        assert_eq!(ds.null_count(0), 1);
    }

    #[test]
    fn header_only_gives_unknown_columns() {
        let ds = load_str("a,b\n").unwrap();
        assert_eq!(ds.row_count(), 0);
        assert_eq!(ds.column_count(), 2);
        assert!(ds.schema.fields.iter().all(|f| f.data_type == DataType::Unknown));
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = load_str("").unwrap_err();
        assert!(err.to_string().contains("no header row"));
    }

    #[test]
    fn ragged_rows_are_an_error() {
        let err = load_str("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn text_and_headers_keep_whitespace() {
        let ds = load_str("name , n\n\" Ada \",1\n  Grace, 2 \n").unwrap();
        assert_eq!(ds.schema.field_names().collect::<Vec<_>>(), vec!["name ", " n"]);
        assert_eq!(ds.schema.fields[1].data_type, DataType::Int64);
        assert_eq!(ds.rows[0][0], Value::Utf8(" Ada ".to_string()));
        assert_eq!(ds.rows[1][0], Value::Utf8("  Grace".to_string()));
        assert_eq!(ds.rows[1][1], Value::Int64(2));
    }

    #[test]
    fn duplicate_headers_are_suffixed() {
        let names = dedupe_headers(["a", "a", "b", "a"].into_iter());
        assert_eq!(names, vec!["a", "a.1", "b", "a.2"]);
    }
}
