//! Minimum spanning tree (Prim).

use grafos_common::types::{VertexId, Weight};
use grafos_common::utils::error::{Error, Result};
use grafos_common::utils::hash::FxHashSet;
use grafos_core::{Edge, Graph};
use serde::Serialize;

use super::traits::GraphAlgorithm;

/// Result of a minimum spanning tree computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MstResult {
    /// Tree edges, in the order they were selected.
    pub edges: Vec<Edge>,
    /// Sum of the tree edge weights, saturating at `Weight::MAX`.
    pub total_weight: Weight,
}

impl MstResult {
    /// Number of tree edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the tree has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// A frontier candidate: an adjacency entry leaving the tree.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    origin: VertexId,
    destination: VertexId,
    weight: Weight,
}

/// Prim's algorithm.
///
/// Starts from the first vertex in insertion order and repeatedly takes the
/// lightest frontier edge with exactly one endpoint in the tree; ties go to
/// the candidate that entered the frontier first. When no candidate crosses
/// the cut the search stops, so a disconnected graph yields the spanning tree
/// of the start vertex's component only. Self-loops never cross the cut.
///
/// Returns an empty result for an empty graph and
/// [`Error::RequiresUndirected`] for a non-empty directed graph.
pub fn prim(graph: &Graph) -> Result<MstResult> {
    let Some(start) = graph.vertex_at(0) else {
        return Ok(MstResult::default());
    };
    if graph.is_directed() {
        return Err(Error::RequiresUndirected);
    }

    let mut visited = FxHashSet::default();
    visited.insert(start.id());

    let mut frontier: Vec<Candidate> = start
        .entries()
        .map(|e| Candidate {
            origin: start.id(),
            destination: e.neighbor,
            weight: e.weight,
        })
        .collect();
    let mut edges = Vec::new();

    while visited.len() < graph.vertex_count() && !frontier.is_empty() {
        let best = frontier
            .iter()
            .enumerate()
            .filter(|(_, c)| visited.contains(&c.origin) != visited.contains(&c.destination))
            .min_by_key(|(_, c)| c.weight)
            .map(|(index, _)| index);
        let Some(index) = best else {
            break;
        };

        let chosen = frontier.remove(index);
        let reached = if visited.contains(&chosen.origin) {
            chosen.destination
        } else {
            chosen.origin
        };
        visited.insert(reached);
        tracing::trace!(%reached, weight = chosen.weight, "prim selected edge");
        edges.push(graph.edge_record(chosen.origin, chosen.destination, chosen.weight));

        if let Some(vertex) = graph.vertex(reached) {
            frontier.extend(
                vertex
                    .entries()
                    .filter(|e| !visited.contains(&e.neighbor))
                    .map(|e| Candidate {
                        origin: reached,
                        destination: e.neighbor,
                        weight: e.weight,
                    }),
            );
        }
    }

    let total_weight = grafos_core::total_weight(&edges);
    tracing::debug!(edges = edges.len(), total_weight, "prim finished");
    Ok(MstResult {
        edges,
        total_weight,
    })
}

/// Prim wrapper.
pub struct PrimAlgorithm;

impl GraphAlgorithm for PrimAlgorithm {
    type Output = MstResult;

    fn name(&self) -> &'static str {
        "prim"
    }

    fn description(&self) -> &'static str {
        "Minimum spanning tree of the first vertex's component"
    }

    fn run(&self, graph: &Graph) -> Result<MstResult> {
        prim(graph)
    }
}
