use data_explorer::pipeline::{run_explore, PipelineOptions};
use data_explorer::DataResult;

fn main() -> DataResult<()> {
    let options = PipelineOptions::default();
    run_explore(&options, &mut std::io::stdout().lock())
}
