//! Single-source shortest paths (Dijkstra) and the mode-dependent spanning tree.

use grafos_common::types::{VertexId, Weight};
use grafos_common::utils::error::{Error, Result};
use grafos_common::utils::hash::FxHashMap;
use grafos_core::{Edge, Graph};
use serde::Serialize;

use super::mst::{MstResult, prim};
use super::traits::GraphAlgorithm;

/// Shortest-path tree rooted at an origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    /// Root of the tree.
    pub origin: VertexId,
    /// Tree edges `predecessor -> vertex`, in vertex insertion order.
    pub edges: Vec<Edge>,
    /// Vertices other than the origin that cannot be reached.
    pub unreachable: Vec<VertexId>,
    /// Distance of every vertex from the origin, `None` when unreachable.
    pub distances: Vec<(VertexId, Option<Weight>)>,
}

impl ShortestPathTree {
    /// Distance from the origin to `target`.
    #[must_use]
    pub fn distance_to(&self, target: VertexId) -> Option<Weight> {
        self.distances
            .iter()
            .find(|(id, _)| *id == target)
            .and_then(|(_, d)| *d)
    }

    /// Vertices on the tree path from the origin to `target`, both included.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if target == self.origin {
            return Some(vec![target]);
        }
        let parent: FxHashMap<VertexId, VertexId> = self
            .edges
            .iter()
            .map(|e| (e.destination, e.origin))
            .collect();

        let mut path = vec![target];
        let mut current = target;
        while current != self.origin {
            current = *parent.get(&current)?;
            if path.len() > parent.len() {
                return None;
            }
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// `a < b` where `None` stands for infinity.
fn shorter(a: Option<Weight>, b: Option<Weight>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Dijkstra's algorithm from `origin`.
///
/// Each round extracts the pending vertex with the smallest tentative
/// distance by linear scan, ties going to the earlier vertex in insertion
/// order, and stops as soon as that distance is infinite. Every outgoing
/// entry of the extracted vertex is then relaxed. A tree edge carries the
/// weight of the entry that performed the last successful relaxation, so
/// `distance(v) == distance(pred(v)) + edge.weight` holds for every tree edge
/// even with parallel edges. A path whose length overflows `Weight` is never
/// relaxed, so a vertex reachable only through such paths is reported as
/// unreachable.
///
/// Results are undefined when the graph holds negative weights.
pub fn dijkstra(graph: &Graph, origin: VertexId) -> Result<ShortestPathTree> {
    let origin_index = graph
        .index_of(origin)
        .ok_or(Error::VertexNotFound(origin))?;

    if graph.vertices().any(|v| v.entries().any(|e| e.weight < 0)) {
        tracing::warn!(%origin, "dijkstra running on a graph with negative weights");
    }

    let n = graph.vertex_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut predecessor: Vec<Option<(usize, Weight)>> = vec![None; n];
    let mut pending = vec![true; n];
    dist[origin_index] = Some(0);

    loop {
        let mut next: Option<usize> = None;
        for i in (0..n).filter(|&i| pending[i]) {
            match next {
                Some(best) if !shorter(dist[i], dist[best]) => {}
                _ => next = Some(i),
            }
        }
        let Some(current) = next else {
            break;
        };
        pending[current] = false;

        let Some(base) = dist[current] else {
            break;
        };
        let Some(vertex) = graph.vertex_at(current) else {
            break;
        };

        for entry in vertex.entries() {
            let Some(target) = graph.index_of(entry.neighbor) else {
                continue;
            };
            let Some(candidate) = base.checked_add(entry.weight) else {
                tracing::trace!(from = current, to = target, "dijkstra skipped overflowing path");
                continue;
            };
            if shorter(Some(candidate), dist[target]) {
                tracing::trace!(from = current, to = target, candidate, "dijkstra relaxed");
                dist[target] = Some(candidate);
                predecessor[target] = Some((current, entry.weight));
            }
        }
    }

    let ids = graph.vertex_ids();
    let edges: Vec<Edge> = predecessor
        .iter()
        .enumerate()
        .filter_map(|(v, pred)| pred.map(|(u, weight)| graph.edge_record(ids[u], ids[v], weight)))
        .collect();
    let unreachable: Vec<VertexId> = ids
        .iter()
        .zip(&dist)
        .filter(|(id, d)| d.is_none() && **id != origin)
        .map(|(id, _)| *id)
        .collect();
    let distances = ids.iter().copied().zip(dist).collect();

    tracing::debug!(
        %origin,
        tree_edges = edges.len(),
        unreachable = unreachable.len(),
        "dijkstra finished"
    );
    Ok(ShortestPathTree {
        origin,
        edges,
        unreachable,
        distances,
    })
}

/// The tree a collaborator shows for the graph's current mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanningTree {
    /// Undirected graph: minimum spanning tree.
    Minimum(MstResult),
    /// Directed graph: shortest-path tree from the default root.
    ShortestPaths(ShortestPathTree),
    /// Directed graph without any edge: nothing to root a tree at.
    Empty,
}

impl SpanningTree {
    /// Tree edges, whatever the kind.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        match self {
            Self::Minimum(mst) => &mst.edges,
            Self::ShortestPaths(tree) => &tree.edges,
            Self::Empty => &[],
        }
    }
}

/// Prim for undirected graphs, Dijkstra for directed ones.
///
/// The Dijkstra root is the first vertex in insertion order that has at
/// least one adjacency entry.
pub fn spanning_tree(graph: &Graph) -> Result<SpanningTree> {
    if !graph.is_directed() {
        return prim(graph).map(SpanningTree::Minimum);
    }
    match graph.first_vertex_with_edges() {
        Some(root) => dijkstra(graph, root).map(SpanningTree::ShortestPaths),
        None => Ok(SpanningTree::Empty),
    }
}

/// Dijkstra wrapper.
pub struct DijkstraAlgorithm {
    /// Root of the shortest-path tree.
    pub origin: VertexId,
}

impl GraphAlgorithm for DijkstraAlgorithm {
    type Output = ShortestPathTree;

    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn description(&self) -> &'static str {
        "Single-source shortest-path tree"
    }

    fn run(&self, graph: &Graph) -> Result<ShortestPathTree> {
        dijkstra(graph, self.origin)
    }
}

/// Spanning tree wrapper.
pub struct SpanningTreeAlgorithm;

impl GraphAlgorithm for SpanningTreeAlgorithm {
    type Output = SpanningTree;

    fn name(&self) -> &'static str {
        "tree"
    }

    fn description(&self) -> &'static str {
        "Prim on undirected graphs, Dijkstra on directed graphs"
    }

    fn run(&self, graph: &Graph) -> Result<SpanningTree> {
        spanning_tree(graph)
    }
}
