//! Value frequency counting for a single column.

use std::collections::HashMap;

use crate::types::{DataSet, Value};

/// Count distinct non-missing values of a column.
///
/// Ordered by descending count; equal counts keep the order in which the values first appear.
pub fn value_counts(dataset: &DataSet, idx: usize) -> Vec<(Value, usize)> {
    let mut counts: Vec<(Value, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for v in dataset.column_values(idx).filter(|v| !v.is_null()) {
        // Keyed on type + text so Utf8("true") and Bool(true) stay distinct.
        let key = format!("{}:{v}", discriminant(v));
        match positions.get(&key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((v.clone(), 1));
            }
        }
    }

    // Stable sort, so ties stay in first-occurrence order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn discriminant(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Int64(_) => 1,
        Value::Float64(_) => 2,
        Value::Bool(_) => 3,
        Value::Utf8(_) => 4,
    }
}
