//! The sequential processing loop tying reader, decider and report together.
use std::io::Read;
use std::time::Instant;

use log::{debug, info};

use crate::reader::{GraphBatchReader, ReadError};
use crate::report::BatchReport;
use crate::search::hamiltonian_path_exists;

/// Runs the decider over every graph the reader yields, strictly one at a
/// time in input order, and returns the accumulated report.
///
/// Each decision is bracketed with a wall-clock measurement; the timing is
/// only meaningful because nothing else runs concurrently. A reader error
/// aborts the whole batch and discards any results gathered so far.
pub fn run_batch<R: Read>(graphs: GraphBatchReader<R>) -> Result<BatchReport, ReadError> {
    let mut report = BatchReport::new();

    for (index, graph) in graphs.enumerate() {
        let graph = graph?;
        debug!(
            "graph {}: vertices {:?}, edges {:?}",
            index + 1,
            graph.vertices,
            graph.edges
        );

        let start = Instant::now();
        let found = hamiltonian_path_exists(&graph);
        let elapsed_seconds = start.elapsed().as_secs_f64();

        info!(
            "graph {}: {} vertices, hamiltonian path {} in {:.7} s",
            index + 1,
            graph.vertex_count(),
            if found { "found" } else { "not found" },
            elapsed_seconds
        );
        report.record(graph.vertex_count(), elapsed_seconds, found);
    }

    Ok(report)
}
