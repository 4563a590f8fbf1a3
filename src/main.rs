use anyhow::{Context, Result};
use log::info;

use hampath::{run_batch, GraphBatchReader};

/// Fixed-named input in the working directory; no CLI surface.
const INPUT_FILE: &str = "test_graphs.csv";
const OUTPUT_FILE: &str = "hamiltonian_path_results.csv";

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("HAMPATH_LOG", "info")
        .write_style("HAMPATH_LOG_STYLE");
    env_logger::init_from_env(env);

    let graphs = GraphBatchReader::from_path(INPUT_FILE)
        .with_context(|| format!("cannot open input file {INPUT_FILE:?}"))?;

    let report = run_batch(graphs).context("reading the graph batch failed")?;

    report
        .export_to_path(OUTPUT_FILE)
        .with_context(|| format!("cannot write results to {OUTPUT_FILE:?}"))?;
    info!("results have been written to {OUTPUT_FILE:?}");

    Ok(())
}
