//! Static graph structure: vertex list, edge list and the adjacency set.
use std::collections::HashSet;

/// Vertex identifiers are arbitrary integers taken verbatim from the input;
/// they are not required to be contiguous or zero-based, and uniqueness
/// within a graph is assumed but not enforced.
pub type VertexId = i64;

/// An undirected edge. The stored orientation is whatever the input gave;
/// [`AdjacencySet`] normalizes it for membership tests.
pub type Edge = (VertexId, VertexId);

/// One graph record from the batch input.
///
/// `vertices` keeps the order in which the identifiers were read; that order
/// is the base domain for permutation enumeration. Edges referencing
/// identifiers absent from `vertices` are not rejected, they simply never
/// contribute to connectivity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(vertices: Vec<VertexId>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True when the record holds neither vertices nor edges.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    pub fn adjacency(&self) -> AdjacencySet {
        AdjacencySet::from_edges(&self.edges)
    }
}

/// Unordered vertex pairs connected by an edge, held as (min, max) keys so
/// that `contains(a, b)` and `contains(b, a)` agree.
#[derive(Clone, Debug, Default)]
pub struct AdjacencySet {
    pairs: HashSet<(VertexId, VertexId)>,
}

impl AdjacencySet {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let pairs = edges.iter().map(|&(src, dst)| Self::key(src, dst)).collect();
        Self { pairs }
    }

    #[inline]
    fn key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
        if a <= b { (a, b) } else { (b, a) }
    }

    #[inline]
    pub fn contains(&self, a: VertexId, b: VertexId) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_symmetric() {
        let graph = Graph::new(vec![1, 2, 3], vec![(1, 2), (3, 2)]);
        let adjacency = graph.adjacency();

        assert!(adjacency.contains(1, 2));
        assert!(adjacency.contains(2, 1));
        assert!(adjacency.contains(2, 3));
        assert!(adjacency.contains(3, 2));
        assert!(!adjacency.contains(1, 3));
    }

    #[test]
    fn duplicate_and_reversed_edges_collapse() {
        let adjacency = AdjacencySet::from_edges(&[(4, 7), (7, 4), (4, 7)]);
        assert_eq!(adjacency.len(), 1);
    }

    #[test]
    fn empty_graph_reports_empty() {
        assert!(Graph::empty().is_empty());
        assert!(Graph::empty().adjacency().is_empty());
        assert!(!Graph::new(vec![], vec![(1, 2)]).is_empty());
    }
}
