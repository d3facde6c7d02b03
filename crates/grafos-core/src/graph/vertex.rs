//! Vertex records.

use grafos_common::types::{Position, VertexId};

use crate::index::adjacency::{AdjacencyEntry, AdjacencyList};

/// A vertex with its name, display position, and outgoing adjacency entries.
///
/// The adjacency list is owned by the vertex and can only be changed through
/// [`Graph`](super::Graph), which keeps undirected edges mirrored.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    name: String,
    position: Option<Position>,
    adjacency: AdjacencyList,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, name: String) -> Self {
        Self {
            id,
            name,
            position: None,
            adjacency: AdjacencyList::new(),
        }
    }

    /// Returns the vertex id.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the vertex name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display position, if a collaborator set one.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Returns the adjacency list.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    pub(crate) fn adjacency_mut(&mut self) -> &mut AdjacencyList {
        &mut self.adjacency
    }

    /// Iterates over outgoing entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &AdjacencyEntry> + '_ {
        self.adjacency.iter()
    }

    /// Number of adjacency entries (a self-loop counts once).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of entries pointing back at this vertex.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.adjacency.neighbors().filter(|n| *n == self.id).count()
    }

    /// Returns `true` if this vertex has an entry pointing at `other`.
    #[must_use]
    pub fn has_entry_to(&self, other: VertexId) -> bool {
        self.adjacency.contains(other)
    }

    /// Returns `true` if the vertex has no adjacency entries.
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Case-insensitive name comparison used by every name lookup.
    #[must_use]
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
