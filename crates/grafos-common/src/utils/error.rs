//! Error types for Grafos.
//!
//! Only genuinely invalid requests are errors. An empty graph, a disconnected
//! graph, or vertices a shortest-path search cannot reach are ordinary results.

use thiserror::Error;

use crate::types::{VertexId, Weight};

/// Errors produced by graph mutation and algorithm entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The vertex id does not resolve to a vertex of this graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// A negative weight was supplied while the graph rejects them.
    #[error("negative edge weight {0} is not allowed")]
    NegativeWeight(Weight),

    /// The algorithm is only defined for undirected graphs.
    #[error("algorithm requires an undirected graph")]
    RequiresUndirected,

    /// The direction mode cannot change while adjacency entries exist.
    #[error("cannot change direction mode: graph still holds {entries} adjacency entries")]
    DirectionLocked {
        /// Number of adjacency entries currently stored.
        entries: usize,
    },
}

/// Result type alias for Grafos operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::VertexNotFound(VertexId::new(3)).to_string(),
            "vertex not found: #3"
        );
        assert_eq!(
            Error::NegativeWeight(-2).to_string(),
            "negative edge weight -2 is not allowed"
        );
        assert_eq!(
            Error::DirectionLocked { entries: 4 }.to_string(),
            "cannot change direction mode: graph still holds 4 adjacency entries"
        );
    }
}
