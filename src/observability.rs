//! Pipeline events and the observers that receive them.
//!
//! The pipeline writes each event's [`Display`](fmt::Display) line into its report output (see
//! [`PipelineEvent::is_echoed`]) and forwards every event to the configured
//! [`PipelineObserver`]. Observers never affect the run.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::export::ExportOutcome;

/// Severity classification for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventSeverity {
    /// Informational event.
    Info,
    /// Anticipated condition that skips work (e.g. absent input).
    Warning,
    /// A stage failed; the run continued.
    Error,
}

/// Something that happened during a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    Loaded { path: PathBuf, rows: usize, columns: usize },
    FileAbsent { path: PathBuf },
    MissingValuesFilled { cells: usize, unfilled_columns: Vec<String> },
    PlotWritten { path: PathBuf },
    Exported { path: PathBuf, rows: usize },
    ExportFailed { path: PathBuf, cause: String },
}

impl PipelineEvent {
    pub fn severity(&self) -> EventSeverity {
        match self {
            PipelineEvent::Loaded { .. }
            | PipelineEvent::MissingValuesFilled { .. }
            | PipelineEvent::PlotWritten { .. }
            | PipelineEvent::Exported { .. } => EventSeverity::Info,
            PipelineEvent::FileAbsent { .. } => EventSeverity::Warning,
            PipelineEvent::ExportFailed { .. } => EventSeverity::Error,
        }
    }

    /// Whether the pipeline writes this event's line into the report output.
    ///
    /// A successful load is only reported to observers; the report itself starts with the
    /// dataset overview.
    pub fn is_echoed(&self) -> bool {
        !matches!(self, PipelineEvent::Loaded { .. })
    }
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineEvent::Loaded { path, rows, columns } => {
                write!(f, "Loaded {rows} rows x {columns} columns from {}", path.display())
            }
            PipelineEvent::FileAbsent { .. } => f.write_str("File not found."),
            PipelineEvent::MissingValuesFilled { unfilled_columns, .. } => {
                f.write_str(
                    "Missing values handled (filled with mean for numeric and mode for categorical data).",
                )?;
                if !unfilled_columns.is_empty() {
                    write!(f, " Left missing: {}.", unfilled_columns.join(", "))?;
                }
                Ok(())
            }
            PipelineEvent::PlotWritten { path } => write!(f, "Plot saved to {}", path.display()),
            PipelineEvent::Exported { path, .. } => write!(f, "Data exported to {}", path.display()),
            PipelineEvent::ExportFailed { cause, .. } => write!(f, "Error in exporting: {cause}"),
        }
    }
}

impl From<ExportOutcome> for PipelineEvent {
    fn from(outcome: ExportOutcome) -> Self {
        match outcome {
            ExportOutcome::Written { path, rows } => PipelineEvent::Exported { path, rows },
            ExportOutcome::Failed { path, cause } => PipelineEvent::ExportFailed {
                path,
                cause: cause.to_string(),
            },
        }
    }
}

/// Observer hook for pipeline events.
pub trait PipelineObserver: Send + Sync {
    fn on_event(&self, event: &PipelineEvent);
}

/// Fans events out to a list of observers, in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_event(&self, event: &PipelineEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Logs events to stderr as `[pipeline][Severity] line`.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_event(&self, event: &PipelineEvent) {
        eprintln!("[pipeline][{:?}] {event}", event.severity());
    }
}

/// Appends events to a local log file, one timestamped line each.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Writes are best-effort; failures to open or write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl PipelineObserver for FileObserver {
    fn on_event(&self, event: &PipelineEvent) {
        self.append_line(&format!("{} {:?} {event}", unix_ts(), event.severity()));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_lines() {
        let absent = PipelineEvent::FileAbsent { path: "x.csv".into() };
        assert_eq!(absent.to_string(), "File not found.");
        assert_eq!(absent.severity(), EventSeverity::Warning);

        let exported = PipelineEvent::Exported { path: "out.csv".into(), rows: 3 };
        assert_eq!(exported.to_string(), "Data exported to out.csv");

        let failed = PipelineEvent::ExportFailed {
            path: "out.csv".into(),
            cause: "io error: denied".to_string(),
        };
        assert_eq!(failed.to_string(), "Error in exporting: io error: denied");
        assert_eq!(failed.severity(), EventSeverity::Error);
    }

    #[test]
    fn export_outcome_becomes_event() {
        let failed = ExportOutcome::Failed {
            path: "out.csv".into(),
            cause: crate::error::DataError::Plot("boom".to_string()),
        };
        let event = PipelineEvent::from(failed);
        assert_eq!(event.severity(), EventSeverity::Error);
        assert_eq!(event.to_string(), "Error in exporting: plot error: boom");

        let written = ExportOutcome::Written { path: "out.csv".into(), rows: 2 };
        assert_eq!(
            PipelineEvent::from(written),
            PipelineEvent::Exported { path: "out.csv".into(), rows: 2 }
        );
    }

    #[test]
    fn unfilled_columns_are_named() {
        let e = PipelineEvent::MissingValuesFilled {
            cells: 2,
            unfilled_columns: vec!["empty".to_string()],
        };
        assert!(e.to_string().ends_with("Left missing: empty."));
    }

    #[test]
    fn loaded_is_not_echoed() {
        let e = PipelineEvent::Loaded { path: "in.csv".into(), rows: 1, columns: 2 };
        assert!(!e.is_echoed());
        assert!(PipelineEvent::PlotWritten { path: "p.svg".into() }.is_echoed());
    }

    #[test]
    fn file_observer_appends_lines() {
        let path = std::env::temp_dir().join(format!(
            "data_explorer_observer_{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let obs = FileObserver::new(&path);
        obs.on_event(&PipelineEvent::FileAbsent { path: "a.csv".into() });
        obs.on_event(&PipelineEvent::Exported { path: "b.csv".into(), rows: 0 });

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Warning File not found."));
        assert!(lines[1].ends_with("Info Data exported to b.csv"));
        let _ = std::fs::remove_file(&path);
    }
}
