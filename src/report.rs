//! Result accumulation and CSV export.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::ser::Serializer;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Column titles of the exported summary; part of the durable contract.
const HEADER: [&str; 3] = [
    "Number of Vertices",
    "Time Taken (seconds)",
    "Hamiltonian Path Found (0/1)",
];

/// Outcome of one decider invocation. Immutable once recorded; the value
/// encodings below are the durable output contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphResult {
    pub num_vertices: usize,
    #[serde(serialize_with = "seconds_fixed")]
    pub elapsed_seconds: f64,
    #[serde(serialize_with = "bool_as_bit")]
    pub path_found: bool,
}

/// Fixed 7-decimal textual precision, as consumers of the summary expect.
fn seconds_fixed<S: Serializer>(seconds: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{seconds:.7}"))
}

fn bool_as_bit<S: Serializer>(found: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*found))
}

/// Append-only, insertion-ordered collection of per-graph results.
///
/// Exporting serializes the accumulated state without resetting it, so a
/// second export reproduces the same rows.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    results: Vec<GraphResult>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, num_vertices: usize, elapsed_seconds: f64, path_found: bool) {
        self.results.push(GraphResult {
            num_vertices,
            elapsed_seconds,
            path_found,
        });
    }

    pub fn results(&self) -> &[GraphResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Writes the header row plus one row per result, in recording order.
    pub fn export<W: Write>(&self, sink: W) -> Result<(), ReportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        writer.write_record(HEADER)?;
        for result in &self.results {
            writer.serialize(result)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn export_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let file = File::create(path)?;
        self.export(file)
    }
}
