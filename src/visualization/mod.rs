//! Standard plots over the numeric columns of a [`DataSet`].
//!
//! [`render_all`] writes three SVG files into [`PlotOptions::output_dir`]:
//!
//! - `correlation_heatmap.svg`: pairwise correlations, annotated to two decimals
//! - `histograms.svg`: one histogram per numeric column
//! - `boxplot.svg`: one horizontal box per numeric column
//!
//! The plot inputs ([`correlation_matrix`], [`histogram`], [`box_stats`]) are plain functions
//! and can be used without rendering anything.

pub mod render;
pub mod stats;

use std::fs;
use std::path::PathBuf;

use crate::error::DataResult;
use crate::types::{ColumnKind, DataSet};

pub use render::{render_boxplot, render_heatmap, render_histograms};
pub use stats::{box_stats, correlation_matrix, histogram, BoxStats, CorrelationMatrix, HistogramBin};

pub const HEATMAP_FILE: &str = "correlation_heatmap.svg";
pub const HISTOGRAMS_FILE: &str = "histograms.svg";
pub const BOXPLOT_FILE: &str = "boxplot.svg";

/// Options controlling plot output.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Directory the SVG files are written to; created if missing.
    pub output_dir: PathBuf,
    /// Bars per histogram.
    pub bins: usize,
    pub heatmap_size: (u32, u32),
    pub histogram_size: (u32, u32),
    pub boxplot_size: (u32, u32),
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            bins: 20,
            heatmap_size: (1000, 600),
            histogram_size: (1200, 1000),
            boxplot_size: (1200, 600),
        }
    }
}

/// Render all three plots for the numeric columns of `dataset`. Returns the written paths in
/// the order heatmap, histograms, boxplot.
pub fn render_all(dataset: &DataSet, options: &PlotOptions) -> DataResult<Vec<PathBuf>> {
    fs::create_dir_all(&options.output_dir)?;

    let numeric: Vec<(String, Vec<f64>)> = dataset
        .schema
        .indexes_of_kind(ColumnKind::Numeric)
        .into_iter()
        .map(|idx| (dataset.schema.fields[idx].name.clone(), dataset.numeric_values(idx)))
        .collect();

    let heatmap_path = options.output_dir.join(HEATMAP_FILE);
    render_heatmap(&correlation_matrix(dataset), &heatmap_path, options.heatmap_size)?;

    let histograms: Vec<(String, Vec<HistogramBin>)> = numeric
        .iter()
        .map(|(name, values)| (name.clone(), histogram(values, options.bins)))
        .collect();
    let histograms_path = options.output_dir.join(HISTOGRAMS_FILE);
    render_histograms(&histograms, &histograms_path, options.histogram_size)?;

    let boxes: Vec<(String, BoxStats)> = numeric
        .iter()
        .filter_map(|(name, values)| Some((name.clone(), box_stats(values)?)))
        .collect();
    let boxplot_path = options.output_dir.join(BOXPLOT_FILE);
    render_boxplot(&boxes, &boxplot_path, options.boxplot_size)?;

    Ok(vec![heatmap_path, histograms_path, boxplot_path])
}
