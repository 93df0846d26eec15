//! Plain-text layout for report sections.

use std::fmt::Write as _;

use crate::types::Value;

/// Render a grid with a header row. Every column is right-aligned to its widest cell and
/// columns are separated by two spaces.
pub(crate) fn render_grid(header: &[String], rows: &[Vec<String>]) -> String {
    let width_of = |col: usize| {
        rows.iter()
            .filter_map(|r| r.get(col))
            .chain(header.get(col))
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
    };
    let widths: Vec<usize> = (0..header.len()).map(width_of).collect();

    let mut out = String::new();
    for line in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
    out
}

/// Render `name  value` pairs with names left-aligned to the longest name.
pub(crate) fn render_series<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: std::fmt::Display,
{
    let pairs: Vec<(K, String)> = pairs.into_iter().map(|(k, v)| (k, v.to_string())).collect();
    let width = pairs.iter().map(|(k, _)| k.as_ref().chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (k, v) in &pairs {
        let _ = writeln!(out, "{:<width$}  {v}", k.as_ref());
    }
    out
}

/// Cell text for previews: missing entries show as `NaN`.
pub(crate) fn preview_cell(v: &Value) -> String {
    match v {
        Value::Null => "NaN".to_string(),
        other => other.to_string(),
    }
}

/// Fixed six-decimal statistics; undefined values show as `NaN`.
pub(crate) fn stat_cell(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.6}")
    }
}
