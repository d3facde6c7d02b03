//! Greedy vertex colouring (Welsh-Powell).

use std::cmp::Reverse;

use grafos_common::types::VertexId;
use grafos_common::utils::error::Result;
use grafos_common::utils::hash::{FxHashMap, FxHashSet};
use grafos_core::Graph;
use serde::Serialize;

use super::traits::GraphAlgorithm;

/// A colour assignment. Colours are numbered from 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Coloring {
    /// `(vertex, colour)` pairs in the order the vertices were coloured.
    pub assignments: Vec<(VertexId, usize)>,
    /// Number of colours used.
    pub color_count: usize,
}

impl Coloring {
    /// Colour of `id`, if it was coloured.
    #[must_use]
    pub fn color_of(&self, id: VertexId) -> Option<usize> {
        self.assignments
            .iter()
            .find(|(v, _)| *v == id)
            .map(|(_, color)| *color)
    }

    /// Vertices grouped by colour, `classes()[c]` holding colour `c`.
    #[must_use]
    pub fn classes(&self) -> Vec<Vec<VertexId>> {
        let mut classes = vec![Vec::new(); self.color_count];
        for &(id, color) in &self.assignments {
            classes[color].push(id);
        }
        classes
    }

    /// Returns `true` if no edge of `graph` joins two vertices of the same
    /// colour. Self-loops are ignored.
    #[must_use]
    pub fn is_proper(&self, graph: &Graph) -> bool {
        graph.vertices().all(|vertex| {
            let own = self.color_of(vertex.id());
            vertex
                .adjacency()
                .neighbors()
                .filter(|n| *n != vertex.id())
                .all(|n| own.is_none() || self.color_of(n) != own)
        })
    }
}

/// Distinct non-loop neighbours of every vertex, arcs counted both ways.
fn neighbourhoods(graph: &Graph) -> FxHashMap<VertexId, FxHashSet<VertexId>> {
    let mut sets: FxHashMap<VertexId, FxHashSet<VertexId>> = graph
        .vertex_ids()
        .into_iter()
        .map(|id| (id, FxHashSet::default()))
        .collect();

    for vertex in graph.vertices() {
        let u = vertex.id();
        for v in vertex.adjacency().neighbors().filter(|v| *v != u) {
            sets.entry(u).or_default().insert(v);
            sets.entry(v).or_default().insert(u);
        }
    }
    sets
}

/// Welsh-Powell colouring.
///
/// Vertices are ordered by degree, highest first, ties keeping insertion
/// order. Each colour class is then filled in that order with every
/// uncoloured vertex not adjacent to a member of the class.
pub fn welsh_powell(graph: &Graph) -> Coloring {
    let neighbours = neighbourhoods(graph);
    let degree = |id: &VertexId| neighbours.get(id).map_or(0, FxHashSet::len);

    let mut order = graph.vertex_ids();
    order.sort_by_key(|id| Reverse(degree(id)));

    let mut uncolored = order;
    let mut assignments = Vec::with_capacity(uncolored.len());
    let mut color = 0;

    while !uncolored.is_empty() {
        let mut class: Vec<VertexId> = Vec::new();
        uncolored.retain(|&id| {
            let conflicts = neighbours
                .get(&id)
                .is_some_and(|adjacent| class.iter().any(|member| adjacent.contains(member)));
            if conflicts {
                return true;
            }
            class.push(id);
            false
        });
        tracing::trace!(color, size = class.len(), "welsh-powell class filled");
        assignments.extend(class.into_iter().map(|id| (id, color)));
        color += 1;
    }

    tracing::debug!(colors = color, "welsh-powell finished");
    Coloring {
        assignments,
        color_count: color,
    }
}

/// Welsh-Powell wrapper.
pub struct WelshPowellAlgorithm;

impl GraphAlgorithm for WelshPowellAlgorithm {
    type Output = Coloring;

    fn name(&self) -> &'static str {
        "welsh-powell"
    }

    fn description(&self) -> &'static str {
        "Greedy vertex colouring, highest degree first"
    }

    fn run(&self, graph: &Graph) -> Result<Coloring> {
        Ok(welsh_powell(graph))
    }
}
