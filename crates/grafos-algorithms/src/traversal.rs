//! Breadth-first and depth-first traversal.
//!
//! Both searches grow a spanning tree of the component reachable from the
//! origin, visiting neighbours in adjacency-list order. Already visited
//! vertices are skipped silently; no cycle information is reported.

use std::collections::VecDeque;

use grafos_common::types::VertexId;
use grafos_common::utils::error::{Error, Result};
use grafos_common::utils::hash::FxHashSet;
use grafos_core::{Edge, Graph, Vertex};
use serde::Serialize;

use super::traits::GraphAlgorithm;

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalTree {
    /// Where the traversal started.
    pub origin: VertexId,
    /// Vertices in the order they were first visited, origin first.
    pub order: Vec<VertexId>,
    /// Tree edges, in discovery order.
    pub edges: Vec<Edge>,
}

impl TraversalTree {
    /// Number of vertices reached, origin included.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the origin reached no other vertex.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

fn origin_vertex(graph: &Graph, origin: VertexId) -> Result<&Vertex> {
    graph.vertex(origin).ok_or(Error::VertexNotFound(origin))
}

/// Breadth-first search from `origin`.
pub fn bfs(graph: &Graph, origin: VertexId) -> Result<TraversalTree> {
    let start = origin_vertex(graph, origin)?;

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut order = vec![origin];
    let mut edges = Vec::new();

    visited.insert(origin);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for entry in current.entries() {
            if !visited.insert(entry.neighbor) {
                continue;
            }
            if let Some(next) = graph.vertex(entry.neighbor) {
                queue.push_back(next);
            }
            order.push(entry.neighbor);
            edges.push(graph.edge_record(current.id(), entry.neighbor, entry.weight));
        }
    }

    tracing::debug!(%origin, reached = order.len(), "bfs finished");
    Ok(TraversalTree {
        origin,
        order,
        edges,
    })
}

/// Depth-first search from `origin`.
///
/// Pre-order: each newly discovered neighbour is explored completely before
/// the next neighbour of its parent is considered. Runs on an explicit stack
/// of `(vertex, next entry)` frames, so deep graphs cannot overflow the call
/// stack.
pub fn dfs(graph: &Graph, origin: VertexId) -> Result<TraversalTree> {
    let start = origin_vertex(graph, origin)?;

    let mut visited = FxHashSet::default();
    let mut order = vec![origin];
    let mut edges = Vec::new();
    let mut stack: Vec<(&Vertex, usize)> = vec![(start, 0)];

    visited.insert(origin);

    while let Some(frame) = stack.last_mut() {
        let vertex = frame.0;
        let Some(entry) = vertex.adjacency().get(frame.1) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        if visited.insert(entry.neighbor) {
            order.push(entry.neighbor);
            edges.push(graph.edge_record(vertex.id(), entry.neighbor, entry.weight));
            if let Some(next) = graph.vertex(entry.neighbor) {
                stack.push((next, 0));
            }
        }
    }

    tracing::debug!(%origin, reached = order.len(), "dfs finished");
    Ok(TraversalTree {
        origin,
        order,
        edges,
    })
}

/// Every vertex reachable from `origin` along outgoing entries, origin included.
pub(crate) fn reachable_set(graph: &Graph, origin: VertexId) -> FxHashSet<VertexId> {
    let mut visited = FxHashSet::default();
    let mut stack = vec![origin];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(vertex) = graph.vertex(current) {
            stack.extend(vertex.adjacency().neighbors().filter(|n| !visited.contains(n)));
        }
    }
    visited
}

/// Breadth-first search wrapper.
pub struct BfsAlgorithm {
    /// Start vertex.
    pub origin: VertexId,
}

impl GraphAlgorithm for BfsAlgorithm {
    type Output = TraversalTree;

    fn name(&self) -> &'static str {
        "bfs"
    }

    fn description(&self) -> &'static str {
        "Breadth-first search tree"
    }

    fn run(&self, graph: &Graph) -> Result<TraversalTree> {
        bfs(graph, self.origin)
    }
}

/// Depth-first search wrapper.
pub struct DfsAlgorithm {
    /// Start vertex.
    pub origin: VertexId,
}

impl GraphAlgorithm for DfsAlgorithm {
    type Output = TraversalTree;

    fn name(&self) -> &'static str {
        "dfs"
    }

    fn description(&self) -> &'static str {
        "Depth-first search tree"
    }

    fn run(&self, graph: &Graph) -> Result<TraversalTree> {
        dfs(graph, self.origin)
    }
}
