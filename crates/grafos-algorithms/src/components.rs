//! Connected and strongly connected components (Roy's algorithm).
//!
//! Roy's method takes the first vertex `v` of a working list, intersects the
//! set of vertices reachable from `v` with the set of vertices that reach
//! `v`, emits that intersection as a component, removes it from the working
//! list, and starts over. On undirected graphs the mirrored adjacency
//! entries make this the ordinary connected components.

use std::cmp::Ordering;

use grafos_common::types::VertexId;
use grafos_common::utils::error::Result;
use grafos_common::utils::hash::FxHashSet;
use grafos_core::{Edge, Graph};
use serde::Serialize;

use super::traits::GraphAlgorithm;
use super::traversal::reachable_set;

/// One component found by [`roy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Member vertices, in insertion order.
    pub vertices: Vec<VertexId>,
    /// Edges induced on the members. Undirected graphs list each mirrored
    /// pair once.
    pub edges: Vec<Edge>,
}

impl Component {
    /// Returns `true` if `id` belongs to this component.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }
}

/// Overall verdict of a components run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSummary {
    /// The graph has no vertices.
    Empty,
    /// Vertices exist but no non-trivial component was found. A directed
    /// acyclic graph lands here even though it has edges.
    IsolatedVertices,
    /// Undirected graph forming a single component.
    Connected,
    /// Directed graph forming a single strongly connected component.
    StronglyConnected,
    /// Anything else.
    Partitioned,
}

impl ComponentSummary {
    /// Message shown to the user, empty for [`Empty`](Self::Empty) and
    /// [`Partitioned`](Self::Partitioned).
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Empty | Self::Partitioned => "",
            Self::IsolatedVertices => "no non-trivial components",
            Self::Connected => "connected graph",
            Self::StronglyConnected => "strongly connected graph",
        }
    }
}

/// Result of [`roy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentsResult {
    /// Non-trivial components in discovery order.
    pub components: Vec<Component>,
    /// Overall verdict.
    pub summary: ComponentSummary,
}

impl ComponentsResult {
    /// Number of components found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no component was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Index of the component containing `id`.
    #[must_use]
    pub fn component_of(&self, id: VertexId) -> Option<usize> {
        self.components.iter().position(|c| c.contains(id))
    }

    /// Shorthand for `self.summary.message()`.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.summary.message()
    }
}

/// Vertices of `working` from which `target` can be reached, `target` included.
///
/// Grows the set by scanning `working` for any vertex with a direct entry
/// into an already included vertex, until nothing new is found.
fn predecessors(graph: &Graph, target: VertexId, working: &[VertexId]) -> FxHashSet<VertexId> {
    let mut included = FxHashSet::default();
    included.insert(target);
    let mut stack = vec![target];

    while let Some(reached) = stack.pop() {
        for &candidate in working {
            if included.contains(&candidate) {
                continue;
            }
            if graph
                .vertex(candidate)
                .is_some_and(|vertex| vertex.has_entry_to(reached))
            {
                included.insert(candidate);
                stack.push(candidate);
            }
        }
    }
    included
}

/// Edges between members of one component.
fn induced_edges(graph: &Graph, members: &[VertexId], member_set: &FxHashSet<VertexId>) -> Vec<Edge> {
    let mut edges = Vec::new();
    for &id in members {
        let Some(vertex) = graph.vertex(id) else {
            continue;
        };
        for entry in vertex.entries() {
            if !member_set.contains(&entry.neighbor) {
                continue;
            }
            if !graph.is_directed() && graph.canonical_cmp(id, entry.neighbor) == Ordering::Greater {
                continue;
            }
            edges.push(graph.edge_record(id, entry.neighbor, entry.weight));
        }
    }
    edges
}

/// Roy's algorithm.
///
/// A component is reported when it has more than one vertex or at least one
/// induced edge (a lone vertex with a self-loop counts). Successors are
/// searched over the whole graph, predecessors only among vertices not yet
/// assigned; intersecting the two keeps every component inside the working
/// list.
pub fn roy(graph: &Graph) -> ComponentsResult {
    let mut working = graph.vertex_ids();
    let mut components = Vec::new();
    let mut spans_all = false;

    while let Some(&root) = working.first() {
        let successors = reachable_set(graph, root);
        let predecessors = predecessors(graph, root, &working);

        let members: Vec<VertexId> = working
            .iter()
            .copied()
            .filter(|id| successors.contains(id) && predecessors.contains(id))
            .collect();
        let member_set: FxHashSet<VertexId> = members.iter().copied().collect();
        let edges = induced_edges(graph, &members, &member_set);

        if members.len() > 1 || !edges.is_empty() {
            if members.len() == graph.vertex_count() {
                spans_all = true;
            }
            tracing::trace!(%root, size = members.len(), "roy found component");
            components.push(Component {
                vertices: members,
                edges,
            });
        }

        working.retain(|id| !member_set.contains(id));
    }

    let summary = if graph.is_empty() {
        ComponentSummary::Empty
    } else if components.is_empty() {
        ComponentSummary::IsolatedVertices
    } else if spans_all && graph.is_directed() {
        ComponentSummary::StronglyConnected
    } else if spans_all {
        ComponentSummary::Connected
    } else {
        ComponentSummary::Partitioned
    };

    tracing::debug!(components = components.len(), ?summary, "roy finished");
    ComponentsResult {
        components,
        summary,
    }
}

/// Roy wrapper.
pub struct RoyAlgorithm;

impl GraphAlgorithm for RoyAlgorithm {
    type Output = ComponentsResult;

    fn name(&self) -> &'static str {
        "roy"
    }

    fn description(&self) -> &'static str {
        "Connected (undirected) or strongly connected (directed) components"
    }

    fn run(&self, graph: &Graph) -> Result<ComponentsResult> {
        Ok(roy(graph))
    }
}
