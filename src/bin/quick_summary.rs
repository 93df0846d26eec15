use data_explorer::pipeline::{run_summary, PipelineOptions};
use data_explorer::DataResult;

fn main() -> DataResult<()> {
    let options = PipelineOptions {
        plot_dir: None,
        ..PipelineOptions::default()
    };
    run_summary(&options, &mut std::io::stdout().lock())
}
