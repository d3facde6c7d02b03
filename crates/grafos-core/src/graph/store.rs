//! Graph store implementation.

use std::cmp::Ordering;
use std::fmt::Write as _;

use grafos_common::types::{Position, VertexId, Weight};
use grafos_common::utils::error::{Error, Result};
use indexmap::IndexMap;

use super::{Edge, GraphConfig, Vertex};

type VertexMap = IndexMap<VertexId, Vertex, ahash::RandomState>;

/// A weighted graph, directed or undirected.
///
/// Vertices are kept in insertion order, which drives every deterministic
/// tie-break (traversal roots, Prim's start vertex, Dijkstra's extraction
/// order) and matrix row order. Each vertex owns its outgoing adjacency
/// entries. In undirected mode an edge `u-v` is stored as two mirrored
/// entries, one per endpoint; a self-loop is always stored once.
///
/// All entry insertions and removals go through the private `link` and
/// `unlink` helpers, so the mirroring cannot drift.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Configuration.
    config: GraphConfig,

    /// Vertices in insertion order.
    vertices: VertexMap,

    /// Next vertex id.
    next_vertex_id: u32,
}

impl Graph {
    /// Creates an empty undirected graph with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty directed graph with default configuration.
    #[must_use]
    pub fn new_directed() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    /// Creates an empty graph with custom configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        let vertices =
            VertexMap::with_capacity_and_hasher(config.initial_vertex_capacity, Default::default());
        Self {
            config,
            vertices,
            next_vertex_id: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns `true` for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Switches between directed and undirected mode.
    ///
    /// Refused while any adjacency entry exists: mirrored undirected entries
    /// would otherwise turn into pairs of opposite arcs and vice versa.
    pub fn set_directed(&mut self, directed: bool) -> Result<()> {
        if directed == self.config.directed {
            return Ok(());
        }
        let entries = self.entry_count();
        if entries > 0 {
            return Err(Error::DirectionLocked { entries });
        }
        tracing::debug!(directed, "direction mode changed");
        self.config.directed = directed;
        Ok(())
    }

    /// Accepts or rejects negative weights for subsequent `add_edge` calls.
    pub fn set_allow_negative_weights(&mut self, allow: bool) {
        self.config.allow_negative_weights = allow;
    }

    // === Vertex Operations ===

    /// Appends a vertex with the given name.
    ///
    /// Names are not checked for uniqueness. Because lookups by name are
    /// case-insensitive, two vertices whose names differ only in case can't be
    /// told apart by [`find_vertex`](Self::find_vertex); use ids instead.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;

        let vertex = Vertex::new(id, name.into());
        tracing::debug!(%id, name = vertex.name(), "vertex added");
        self.vertices.insert(id, vertex);
        id
    }

    /// Appends a vertex named with the lowest unused `<prefix><n>` label, `n >= 1`.
    pub fn add_vertex_auto(&mut self) -> VertexId {
        let name = self.next_vertex_name();
        self.add_vertex(name)
    }

    /// Returns the name [`add_vertex_auto`](Self::add_vertex_auto) would use.
    ///
    /// The collision check is exact (case-sensitive), matching how generated
    /// names are produced.
    #[must_use]
    pub fn next_vertex_name(&self) -> String {
        let prefix = &self.config.name_prefix;
        (1u32..)
            .map(|n| format!("{prefix}{n}"))
            .find(|candidate| self.vertices.values().all(|v| v.name() != candidate))
            .unwrap_or_else(|| prefix.clone())
    }

    /// Records a display position for a vertex.
    pub fn set_position(&mut self, id: VertexId, position: Position) -> Result<()> {
        self.vertex_mut(id)?.set_position(position);
        Ok(())
    }

    /// Removes a vertex together with every entry that references it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex> {
        let vertex = self
            .vertices
            .shift_remove(&id)
            .ok_or(Error::VertexNotFound(id))?;

        let mut purged = 0;
        for other in self.vertices.values_mut() {
            purged += other.adjacency_mut().remove_all(id);
        }

        tracing::debug!(%id, name = vertex.name(), purged, "vertex removed");
        Ok(vertex)
    }

    /// Gets a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex> {
        self.vertices.get_mut(&id).ok_or(Error::VertexNotFound(id))
    }

    /// Returns `true` if the id resolves to a vertex of this graph.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Finds a vertex by name, ignoring case and surrounding whitespace.
    ///
    /// Returns the first match in insertion order, or `None` for blank or
    /// unknown names.
    #[must_use]
    pub fn find_vertex(&self, name: &str) -> Option<&Vertex> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.vertices.values().find(|v| v.name_matches(name))
    }

    /// Id of the vertex [`find_vertex`](Self::find_vertex) would return.
    #[must_use]
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.find_vertex(name).map(Vertex::id)
    }

    /// Name of a vertex, if it exists.
    #[must_use]
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::name)
    }

    /// Iterates over vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// Returns vertex ids in insertion order.
    #[must_use]
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// Position of a vertex in insertion order.
    #[must_use]
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.vertices.get_index_of(&id)
    }

    /// Vertex at a position in insertion order.
    #[must_use]
    pub fn vertex_at(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get_index(index).map(|(_, v)| v)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex, in insertion order, that has at least one adjacency entry.
    ///
    /// Used as the default root when a collaborator asks for a tree without
    /// naming an origin.
    #[must_use]
    pub fn first_vertex_with_edges(&self) -> Option<VertexId> {
        self.vertices
            .values()
            .find(|v| !v.is_isolated())
            .map(Vertex::id)
    }

    /// Removes every vertex and resets id allocation. The direction mode is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.next_vertex_id = 0;
        tracing::debug!("graph cleared");
    }

    // === Edge Operations ===

    /// Connects `u` to `v` with the given weight.
    ///
    /// In undirected mode the mirrored entry `v -> u` is added as well, unless
    /// the edge is a self-loop. Parallel edges are allowed.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<()> {
        if !self.contains(u) {
            return Err(Error::VertexNotFound(u));
        }
        if !self.contains(v) {
            return Err(Error::VertexNotFound(v));
        }
        if weight < 0 && !self.config.allow_negative_weights {
            return Err(Error::NegativeWeight(weight));
        }

        self.link(u, v, weight);
        tracing::debug!(origin = %u, destination = %v, weight, "edge added");
        Ok(())
    }

    /// Disconnects `u` from `v`.
    ///
    /// Removes the first entry of `u` pointing at `v` and, in undirected mode,
    /// the first entry of `v` pointing at `u`. Returns `Ok(false)` when no such
    /// entry existed.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool> {
        if !self.contains(u) {
            return Err(Error::VertexNotFound(u));
        }
        if !self.contains(v) {
            return Err(Error::VertexNotFound(v));
        }

        let removed = self.unlink(u, v);
        if removed {
            tracing::debug!(origin = %u, destination = %v, "edge removed");
        }
        Ok(removed)
    }

    /// Checks whether two vertices, given by name, are adjacent.
    ///
    /// Blank or unknown names yield `false`. In undirected mode an entry in
    /// either direction counts, so a damaged mirror never hides an edge.
    #[must_use]
    pub fn are_adjacent(&self, name1: &str, name2: &str) -> bool {
        let (Some(a), Some(b)) = (self.find_vertex(name1), self.find_vertex(name2)) else {
            return false;
        };

        if a.has_entry_to(b.id()) {
            return true;
        }
        !self.is_directed() && b.has_entry_to(a.id())
    }

    /// Renders one line per vertex: `name → n1(w1) n2(w2)` or `name → (isolated)`.
    #[must_use]
    pub fn list_adjacency(&self) -> String {
        let mut out = String::new();
        for vertex in self.vertices.values() {
            let _ = write!(out, "{} →", vertex.name());
            if vertex.is_isolated() {
                out.push_str(" (isolated)");
            } else {
                for entry in vertex.entries() {
                    let neighbor = self.name(entry.neighbor).unwrap_or("?");
                    let _ = write!(out, " {neighbor}({})", entry.weight);
                }
            }
            out.push('\n');
        }
        out
    }

    /// Total number of adjacency entries across all vertices.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.vertices.values().map(Vertex::degree).sum()
    }

    /// Number of logical edges.
    ///
    /// Each directed entry is one edge; in undirected mode a mirrored pair is
    /// one edge and a self-loop is one edge.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        if self.is_directed() {
            return self.entry_count();
        }
        let loops: usize = self.vertices.values().map(Vertex::self_loop_count).sum();
        (self.entry_count() - loops) / 2 + loops
    }

    /// Builds the transient [`Edge`] record for an entry `origin -> destination`.
    #[must_use]
    pub fn edge_record(&self, origin: VertexId, destination: VertexId, weight: Weight) -> Edge {
        let from = self.name(origin).unwrap_or("?");
        let to = self.name(destination).unwrap_or("?");
        let label = if self.is_directed() {
            format!("{from}->{to}")
        } else {
            format!("{from}-{to}")
        };
        Edge {
            origin,
            destination,
            weight,
            label,
        }
    }

    /// Canonical ordering of two vertices: by name, then by insertion position.
    ///
    /// Used to pick one representative of each mirrored undirected pair.
    #[must_use]
    pub fn canonical_cmp(&self, a: VertexId, b: VertexId) -> Ordering {
        let name_a = self.name(a).unwrap_or_default();
        let name_b = self.name(b).unwrap_or_default();
        name_a
            .cmp(name_b)
            .then_with(|| self.index_of(a).cmp(&self.index_of(b)))
    }

    // === Internal Helpers ===

    /// The only code path that adds adjacency entries.
    fn link(&mut self, u: VertexId, v: VertexId, weight: Weight) {
        if let Some(origin) = self.vertices.get_mut(&u) {
            origin.adjacency_mut().push(v, weight);
        }
        if !self.is_directed() && u != v {
            if let Some(destination) = self.vertices.get_mut(&v) {
                destination.adjacency_mut().push(u, weight);
            }
        }
    }

    /// The only code path that removes a single edge's entries.
    fn unlink(&mut self, u: VertexId, v: VertexId) -> bool {
        let removed = self
            .vertices
            .get_mut(&u)
            .and_then(|origin| origin.adjacency_mut().remove_first(v))
            .is_some();

        if removed && !self.is_directed() && u != v {
            if let Some(destination) = self.vertices.get_mut(&v) {
                destination.adjacency_mut().remove_first(u);
            }
        }
        removed
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
