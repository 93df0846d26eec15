use std::path::PathBuf;

use data_explorer::ingestion::{load_csv, LoadOptions};
use data_explorer::pipeline::{run_explore, run_summary, PipelineOptions};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("data_explorer_it_{}_{name}", std::process::id()))
}

fn options(input: &str, tag: &str) -> PipelineOptions {
    PipelineOptions {
        input_path: PathBuf::from(input),
        output_path: temp_path(&format!("{tag}_out.csv")),
        plot_dir: Some(temp_path(&format!("{tag}_plots"))),
        ..PipelineOptions::default()
    }
}

#[test]
fn explore_scenario_end_to_end() {
    let opts = PipelineOptions {
        report_json: Some(temp_path("explore_report.json")),
        ..options("tests/fixtures/scenario.csv", "explore")
    };
    let mut out = Vec::new();
    run_explore(&opts, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let stages = [
        "--- Dataset Overview ---",
        "--- Statistical Summary of Numerical Columns ---",
        "--- Unique Values in Categorical Columns ---",
        "--- Handling Missing Data ---",
        "Missing values handled (filled with mean for numeric and mode for categorical data).",
        "--- Data Visualization ---",
        "Data exported to",
    ];
    let positions: Vec<usize> = stages.iter().map(|s| text.find(s).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(text.matches("Plot saved to").count(), 3);

    let exported = std::fs::read_to_string(&opts.output_path).unwrap();
    assert_eq!(exported, "a,b\n1.0,x\n2.0,x\n3.0,x\n");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(opts.report_json.as_ref().unwrap()).unwrap()).unwrap();
    assert_eq!(json["rows"], 3);
    assert_eq!(json["missing"][0]["count"], 1);

    let _ = std::fs::remove_file(&opts.output_path);
    let _ = std::fs::remove_file(opts.report_json.as_ref().unwrap());
    let _ = std::fs::remove_dir_all(opts.plot_dir.as_ref().unwrap());
}

#[test]
fn explore_leaves_all_missing_column_missing() {
    let opts = PipelineOptions {
        plot_dir: None,
        ..options("tests/fixtures/survey.csv", "survey")
    };
    let mut out = Vec::new();
    run_explore(&opts, &mut out).unwrap();

    let ds = load_csv(&opts.output_path, &LoadOptions::default())
        .unwrap()
        .into_dataset()
        .unwrap();
    let missing: Vec<usize> = (0..ds.column_count()).map(|i| ds.null_count(i)).collect();
    assert_eq!(missing, vec![0, 0, 0, 0, 0, 6]);
    let _ = std::fs::remove_file(&opts.output_path);
}

#[test]
fn summary_exports_unchanged_data() {
    let opts = options("tests/fixtures/scenario.csv", "summary");
    let mut out = Vec::new();
    run_summary(&opts, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Sum of Numerical Columns:\na  4.0\n"));
    assert!(text.contains("Average of Numerical Columns:\na  2.0\n"));
    assert!(text.contains("Minimum Values of Numerical Columns:\na  1.0\n"));
    assert!(text.contains("Maximum Values of Numerical Columns:\na  3.0\n"));
    assert!(!text.contains("--- Handling Missing Data ---"));

    let exported = std::fs::read_to_string(&opts.output_path).unwrap();
    assert_eq!(exported, "a,b\n1.0,x\n,x\n3.0,\n");
    assert!(!opts.plot_dir.as_ref().unwrap().exists());
    let _ = std::fs::remove_file(&opts.output_path);
}

#[test]
fn absent_input_skips_every_later_stage() {
    let opts = options("tests/fixtures/does_not_exist.csv", "absent");
    let mut out = Vec::new();
    run_explore(&opts, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "File not found.\nNo data to display details.\n");
    assert!(!opts.output_path.exists());
    assert!(!opts.plot_dir.as_ref().unwrap().exists());
}

#[test]
fn failed_export_is_reported_not_returned() {
    let opts = PipelineOptions {
        output_path: temp_path("missing_dir").join("out.csv"),
        plot_dir: None,
        ..options("tests/fixtures/people.csv", "failed")
    };
    let mut out = Vec::new();
    run_summary(&opts, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.trim_end().lines().last().unwrap().starts_with("Error in exporting: "));
}

#[test]
fn malformed_input_is_an_error() {
    let input = temp_path("ragged.csv");
    std::fs::write(&input, "a,b\n1,2\n3\n").unwrap();
    let opts = PipelineOptions {
        input_path: input.clone(),
        plot_dir: None,
        ..options("unused", "ragged")
    };
    let mut out = Vec::new();
    assert!(run_explore(&opts, &mut out).is_err());
    assert!(!opts.output_path.exists());
    let _ = std::fs::remove_file(&input);
}
