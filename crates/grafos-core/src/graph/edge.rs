//! Transient edge records.

use grafos_common::types::{VertexId, Weight};
use serde::Serialize;

/// An edge as reported by algorithms and matrix encoders.
///
/// Edges are not stored; the graph keeps adjacency entries on each vertex and
/// builds `Edge` values on demand. They identify vertices by id and must be
/// treated as stale once the graph is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Source vertex.
    pub origin: VertexId,
    /// Target vertex.
    pub destination: VertexId,
    /// Edge weight.
    pub weight: Weight,
    /// Display label, `A-B` for undirected graphs and `A->B` for directed ones.
    pub label: String,
}

impl Edge {
    /// Returns `true` if origin and destination are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }

    /// Returns `true` if the edge joins `a` and `b`, in either orientation.
    #[must_use]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.origin == a && self.destination == b) || (self.origin == b && self.destination == a)
    }
}

/// Sums the weights of a set of edges, saturating at the `Weight` bounds.
#[must_use]
pub fn total_weight(edges: &[Edge]) -> Weight {
    edges
        .iter()
        .fold(0, |total: Weight, e| total.saturating_add(e.weight))
}
