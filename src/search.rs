//! Exhaustive Hamiltonian path search.
//!
//! For a graph with vertex sequence `V` the search enumerates all `|V|!`
//! orderings and accepts the first one whose consecutive pairs are all
//! adjacent. There is deliberately no pruning and no subset-DP shortcut:
//! the decider exists to measure how the factorial search space behaves as
//! `|V|` grows, so correctness and predictability win over speed.
//!
//! Complexity: `O(|V|! * |V|)` time, `O(|V| + |E|)` space for the
//! adjacency set. The search always terminates with a boolean.
use itertools::Itertools;

use crate::graph::Graph;

/// Decides whether `graph` contains a Hamiltonian path: an ordering of all
/// vertices in which every consecutive pair is joined by an edge.
///
/// Conventions, kept bit-for-bit compatible with the output consumers:
/// * zero vertices → `false`;
/// * exactly one vertex → `true` (a single-vertex walk needs no edges);
/// * two or more vertices without any edge → `false` immediately.
///
/// Pure and deterministic: the same graph always yields the same answer,
/// though which permutation witnesses a `true` result is unspecified.
pub fn hamiltonian_path_exists(graph: &Graph) -> bool {
    if graph.vertex_count() < 2 {
        return graph.vertex_count() == 1;
    }

    let adjacency = graph.adjacency();
    if adjacency.is_empty() {
        return false;
    }

    graph
        .vertices
        .iter()
        .copied()
        .permutations(graph.vertex_count())
        .any(|ordering| {
            ordering
                .windows(2)
                .all(|pair| adjacency.contains(pair[0], pair[1]))
        })
}
