//! Plot inputs computed from the numeric subset of a dataset.

use serde::Serialize;

use crate::profiling::quantile_sorted;
use crate::types::{ColumnKind, DataSet};

/// Pairwise Pearson correlation of the numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Numeric column names, in schema order.
    pub columns: Vec<String>,
    /// `values[i][j]` is the correlation of `columns[i]` and `columns[j]`; `NaN` if undefined.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Correlation matrix over all numeric columns.
///
/// Each pair uses only the rows where both entries are present. A pair with fewer than two such
/// rows, or with a constant side, is `NaN`.
pub fn correlation_matrix(dataset: &DataSet) -> CorrelationMatrix {
    let idxs = dataset.schema.indexes_of_kind(ColumnKind::Numeric);
    let columns = idxs
        .iter()
        .map(|&i| dataset.schema.fields[i].name.clone())
        .collect();

    let mut values = vec![vec![f64::NAN; idxs.len()]; idxs.len()];
    for (a, &ia) in idxs.iter().enumerate() {
        for (b, &ib) in idxs.iter().enumerate().skip(a) {
            let pairs: Vec<(f64, f64)> = dataset
                .rows
                .iter()
                .filter_map(|row| Some((row.get(ia)?.as_f64()?, row.get(ib)?.as_f64()?)))
                .collect();
            let r = pearson(&pairs);
            values[a][b] = r;
            values[b][a] = r;
        }
    }

    CorrelationMatrix { columns, values }
}

fn pearson(pairs: &[(f64, f64)]) -> f64 {
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let n = pairs.len() as f64;
    let (mx, my) = pairs
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    let (mx, my) = (mx / n, my / n);

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in pairs {
        let (dx, dy) = (x - mx, y - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

/// One histogram bar covering `[lower, upper)` (the last bar is closed).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram of the finite values.
///
/// When every value is the same, the range is widened by 0.5 on each side. Returns no bins for
/// empty input or `bins == 0`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if min == max { (min - 0.5, max + 0.5) } else { (min, max) };
    let width = (hi - lo) / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();
    for v in finite {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

/// Box-and-whisker statistics with whiskers at 1.5 × IQR.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value not below `q1 - 1.5 * iqr`.
    pub lower_whisker: f64,
    /// Largest value not above `q3 + 1.5 * iqr`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

/// Box statistics of the finite values; `None` if there are none.
pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile_sorted(&sorted, 0.25);
    let median = quantile_sorted(&sorted, 0.5);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let inside = || sorted.iter().copied().filter(|v| (lo_fence..=hi_fence).contains(v));
    let lower_whisker = inside().next().unwrap_or(q1);
    let upper_whisker = inside().last().unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| !(lo_fence..=hi_fence).contains(v))
        .collect();

    Some(BoxStats {
        q1,
        median,
        q3,
        lower_whisker,
        upper_whisker,
        outliers,
    })
}
