use data_explorer::ingestion::{load_csv, LoadOptions};
use data_explorer::processing::fill_missing;
use data_explorer::visualization::{render_all, PlotOptions, BOXPLOT_FILE, HEATMAP_FILE, HISTOGRAMS_FILE};

#[test]
fn render_all_writes_three_svg_files() {
    let mut ds = load_csv("tests/fixtures/survey.csv", &LoadOptions::default())
        .unwrap()
        .into_dataset()
        .unwrap();
    let _ = fill_missing(&mut ds);

    let dir = std::env::temp_dir().join(format!("data_explorer_plots_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let options = PlotOptions {
        output_dir: dir.clone(),
        ..PlotOptions::default()
    };

    let paths = render_all(&ds, &options).unwrap();
    assert_eq!(
        paths,
        vec![dir.join(HEATMAP_FILE), dir.join(HISTOGRAMS_FILE), dir.join(BOXPLOT_FILE)]
    );
    for path in &paths {
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"));
    }

    let heatmap = std::fs::read_to_string(&paths[0]).unwrap();
    assert!(heatmap.contains("Correlation Heatmap"));
    assert!(heatmap.contains("1.00"));
    assert!(heatmap.contains("income"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_all_without_numeric_columns_still_writes_files() {
    let ds = load_csv("tests/fixtures/people.csv", &LoadOptions::default())
        .unwrap()
        .into_dataset()
        .unwrap();
    let categorical_only = data_explorer::types::DataSet::new(
        data_explorer::types::Schema::new(vec![ds.schema.fields[1].clone()]),
        ds.rows.iter().map(|r| vec![r[1].clone()]).collect(),
    );

    let dir = std::env::temp_dir().join(format!("data_explorer_plots_empty_{}", std::process::id()));
    let options = PlotOptions {
        output_dir: dir.clone(),
        ..PlotOptions::default()
    };
    let paths = render_all(&categorical_only, &options).unwrap();
    assert!(paths.iter().all(|p| p.exists()));
    let _ = std::fs::remove_dir_all(&dir);
}
