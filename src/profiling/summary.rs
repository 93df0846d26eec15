//! Per-column summaries: numeric `describe` statistics and categorical frequency tables.

use serde::Serialize;

use crate::processing::value_counts;
use crate::types::DataSet;

/// Descriptive statistics for a numeric column, computed over non-missing values only.
///
/// A column with no non-missing values has `count == 0` and `NaN` everywhere else
/// (`sum` is `0.0`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub column: String,
    /// Number of non-missing values.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1); `NaN` for fewer than two values.
    pub std: f64,
    pub min: f64,
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
    pub max: f64,
    pub sum: f64,
}

impl NumericSummary {
    /// Summarize `values` (already stripped of missing entries).
    pub fn from_values(column: impl Into<String>, values: &[f64]) -> Self {
        let column = column.into();
        let count = values.len();
        if count == 0 {
            return Self {
                column,
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q1: f64::NAN,
                median: f64::NAN,
                q3: f64::NAN,
                max: f64::NAN,
                sum: 0.0,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;
        let std = if count < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        };

        Self {
            column,
            count,
            mean,
            std,
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
            sum,
        }
    }
}

/// Quantile of an ascending, non-empty slice using linear interpolation between closest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// One distinct value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Distinct-value frequencies of a categorical column, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    pub column: String,
    pub counts: Vec<ValueCount>,
}

impl FrequencyTable {
    /// Build the table for column `idx`.
    pub fn for_column(dataset: &DataSet, idx: usize) -> Self {
        let counts = value_counts(dataset, idx)
            .into_iter()
            .map(|(value, count)| ValueCount {
                value: value.to_string(),
                count,
            })
            .collect();
        Self {
            column: dataset.schema.fields[idx].name.clone(),
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn describe_matches_known_values() {
        let s = NumericSummary::from_values("x", &[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(s.count, 4);
        assert!(approx(s.mean, 2.5));
        assert!(approx(s.std, 1.2909944487358056));
        assert!(approx(s.min, 1.0));
        assert!(approx(s.q1, 1.75));
        assert!(approx(s.median, 2.5));
        assert!(approx(s.q3, 3.25));
        assert!(approx(s.max, 4.0));
        assert!(approx(s.sum, 10.0));
    }

    #[test]
    fn single_value_has_undefined_std() {
        let s = NumericSummary::from_values("x", &[7.0]);
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert!(approx(s.q1, 7.0));
        assert!(approx(s.q3, 7.0));
    }

    #[test]
    fn empty_column_is_all_nan() {
        let s = NumericSummary::from_values("x", &[]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
        assert!(s.min.is_nan());
        assert!(s.max.is_nan());
        assert_eq!(s.sum, 0.0);
    }

    #[test]
    fn quantile_interpolates() {
        let v = [10.0, 20.0, 30.0];
        assert!(approx(quantile_sorted(&v, 0.0), 10.0));
        assert!(approx(quantile_sorted(&v, 0.25), 15.0));
        assert!(approx(quantile_sorted(&v, 1.0), 30.0));
    }
}
