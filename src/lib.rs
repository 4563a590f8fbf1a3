//! # Batch Hamiltonian path decider
//!
//! Given a batch of graphs `G = (V, E)` described in a tagged
//! comma-separated stream, decide for each one whether a Hamiltonian path
//! exists: an ordering `v_1, v_2, ..., v_n` of all of `V` such that
//! `{v_i, v_{i+1}} ∈ E` for every `1 ≤ i < n`. The decision procedure is an
//! exact, exhaustive enumeration of all `|V|!` orderings with O(1)
//! adjacency tests, deliberately unpruned so the factorial blowup can be
//! measured as `|V|` grows. Each decision is timed and the batch outcome is
//! exported as a CSV summary.
//!
//! Pipeline: [`reader::GraphBatchReader`] lazily yields one [`graph::Graph`]
//! per input record; [`batch::run_batch`] times
//! [`search::hamiltonian_path_exists`] on each and accumulates a
//! [`report::BatchReport`], which is then exported.
//!
//! ## Example
//!
//! ```rust
//! use hampath::{GraphBatchReader, run_batch};
//!
//! let input = "c\nv,1,2,3\ne,1,2\ne,2,3\n";
//! let report = run_batch(GraphBatchReader::new(input.as_bytes())).unwrap();
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.results()[0].num_vertices, 3);
//! assert!(report.results()[0].path_found);
//! ```

pub mod batch;
pub mod graph;
pub mod reader;
pub mod report;
pub mod search;

pub use batch::run_batch;
pub use graph::{AdjacencySet, Edge, Graph, VertexId};
pub use reader::{GraphBatchReader, ReadError};
pub use report::{BatchReport, GraphResult, ReportError};
pub use search::hamiltonian_path_exists;
