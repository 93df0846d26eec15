//! The two end-to-end runs behind the binaries.
//!
//! - [`run_explore`]: load, descriptive report, fill missing values, plots, export
//! - [`run_summary`]: load, quick summary, export
//!
//! All human-readable output goes to the caller's writer. An absent input file is reported and
//! ends the run after the reporter's diagnostic; no later stage runs and no output file is
//! written. A failed export is reported and does not fail the run.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::DataResult;
use crate::export::export_csv;
use crate::ingestion::{load_csv, LoadOptions, LoadOutcome};
use crate::observability::{PipelineEvent, PipelineObserver};
use crate::processing::fill_missing;
use crate::profiling::{dataset_details, quick_summary, DEFAULT_PREVIEW_ROWS};
use crate::types::DataSet;
use crate::visualization::{render_all, PlotOptions};

/// Options for [`run_explore`] and [`run_summary`].
#[derive(Clone)]
pub struct PipelineOptions {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Where plots go; `None` skips the visualization stage.
    pub plot_dir: Option<PathBuf>,
    pub load: LoadOptions,
    pub preview_rows: usize,
    /// Also write the descriptive report as JSON to this path (explore only).
    pub report_json: Option<PathBuf>,
    /// Optional observer receiving every [`PipelineEvent`].
    pub observer: Option<Arc<dyn PipelineObserver>>,
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("input_path", &self.input_path)
            .field("output_path", &self.output_path)
            .field("plot_dir", &self.plot_dir)
            .field("load", &self.load)
            .field("preview_rows", &self.preview_rows)
            .field("report_json", &self.report_json)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("input_dataset.csv"),
            output_path: PathBuf::from("output_dataset.csv"),
            plot_dir: Some(PathBuf::from("plots")),
            load: LoadOptions::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            report_json: None,
            observer: None,
        }
    }
}

struct Emitter<'a, W: Write> {
    out: &'a mut W,
    observer: Option<&'a dyn PipelineObserver>,
}

impl<W: Write> Emitter<'_, W> {
    fn emit(&mut self, event: PipelineEvent) -> DataResult<()> {
        if event.is_echoed() {
            writeln!(self.out, "{event}")?;
        }
        if let Some(obs) = self.observer {
            obs.on_event(&event);
        }
        Ok(())
    }
}

fn load<W: Write>(options: &PipelineOptions, em: &mut Emitter<'_, W>) -> DataResult<Option<DataSet>> {
    match load_csv(&options.input_path, &options.load)? {
        LoadOutcome::Loaded(ds) => {
            em.emit(PipelineEvent::Loaded {
                path: options.input_path.clone(),
                rows: ds.row_count(),
                columns: ds.column_count(),
            })?;
            Ok(Some(ds))
        }
        LoadOutcome::FileAbsent { path } => {
            em.emit(PipelineEvent::FileAbsent { path })?;
            Ok(None)
        }
    }
}

fn export<W: Write>(dataset: &DataSet, options: &PipelineOptions, em: &mut Emitter<'_, W>) -> DataResult<()> {
    em.emit(export_csv(dataset, &options.output_path).into())
}

/// Load, report, fill missing values, render plots, and export.
///
/// Errors other than an absent input or a failed export (malformed CSV, unwritable plot
/// directory, a failed write to `out`) are returned.
pub fn run_explore<W: Write>(options: &PipelineOptions, out: &mut W) -> DataResult<()> {
    let observer = options.observer.as_deref();
    let mut em = Emitter { out, observer };

    let mut dataset = load(options, &mut em)?;
    let report = dataset_details(dataset.as_ref(), options.preview_rows, &mut *em.out)?;
    let Some(dataset) = dataset.as_mut() else {
        return Ok(());
    };

    if let (Some(report), Some(path)) = (report.as_ref(), options.report_json.as_ref()) {
        fs::write(path, report.to_json()?)?;
    }

    writeln!(em.out, "\n--- Handling Missing Data ---")?;
    let summary = fill_missing(dataset);
    writeln!(em.out)?;
    em.emit(PipelineEvent::MissingValuesFilled {
        cells: summary.filled_cells(),
        unfilled_columns: summary.unfilled_columns().map(str::to_string).collect(),
    })?;

    if let Some(dir) = options.plot_dir.as_ref() {
        writeln!(em.out, "\n--- Data Visualization ---")?;
        let plot_options = PlotOptions {
            output_dir: dir.clone(),
            ..PlotOptions::default()
        };
        for path in render_all(dataset, &plot_options)? {
            em.emit(PipelineEvent::PlotWritten { path })?;
        }
    }

    export(dataset, options, &mut em)
}

/// Load, print the quick summary, and export unchanged.
pub fn run_summary<W: Write>(options: &PipelineOptions, out: &mut W) -> DataResult<()> {
    let observer = options.observer.as_deref();
    let mut em = Emitter { out, observer };

    let dataset = load(options, &mut em)?;
    quick_summary(dataset.as_ref(), options.preview_rows, &mut *em.out)?;
    match dataset {
        Some(ds) => export(&ds, options, &mut em),
        None => Ok(()),
    }
}
