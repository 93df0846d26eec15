//! Column type inference for loaded CSV data.
//!
//! Inference runs once per column over its non-missing cells. Priority:
//! `Int64` → `Float64` → `Bool` → `Utf8`. An integer column that contains missing entries is
//! widened to `Float64`, since a mean fill may later produce fractional values. A column with no
//! non-missing cells is `Unknown`.

use crate::error::{DataError, DataResult};
use crate::types::{DataType, Value};

/// Infer the data type of a column from its cells (`None` = missing).
pub fn infer_data_type<'a, I>(cells: I) -> DataType
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut any_present = false;
    let mut any_missing = false;
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;

    for cell in cells {
        let Some(s) = cell else {
            any_missing = true;
            continue;
        };
        any_present = true;
        let s = s.trim();
        if all_int && s.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && s.parse::<f64>().is_err() {
            all_float = false;
        }
        if all_bool && parse_bool(s).is_err() {
            all_bool = false;
        }
        if !all_float && !all_bool {
            return DataType::Utf8;
        }
    }

    match (any_present, all_int, all_float, all_bool) {
        (false, ..) => DataType::Unknown,
        (true, true, _, _) if !any_missing => DataType::Int64,
        (true, _, true, _) => DataType::Float64,
        (true, _, _, true) => DataType::Bool,
        _ => DataType::Utf8,
    }
}

/// Parse a non-missing cell as `data_type`. Text is kept verbatim; numbers and booleans are
/// parsed from the trimmed cell.
///
/// `row` is the 1-based line number reported to users.
pub(crate) fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
) -> DataResult<Value> {
    let parse_error = |message: String| DataError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(raw.to_owned())),
        DataType::Int64 => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Float64 => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Bool => parse_bool(raw.trim()).map(Value::Bool).map_err(parse_error),
        DataType::Unknown => Err(parse_error("column has no declared type".to_string())),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err("expected bool (true/false)".to_string())
    }
}
