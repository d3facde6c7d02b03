//! Per-vertex adjacency lists.
//!
//! Each vertex owns one [`AdjacencyList`]: an insertion-ordered sequence of
//! `(neighbor, weight)` entries. Order matters, since traversals visit
//! neighbours in list order and removal always targets the first match.
//! Duplicate entries (multi-edges) are allowed.

use grafos_common::types::{VertexId, Weight};
use smallvec::SmallVec;

/// Number of entries stored inline before spilling to the heap.
const INLINE_ENTRIES: usize = 4;

/// One adjacency entry: an edge towards `neighbor` carrying `weight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEntry {
    /// The vertex this entry points to.
    pub neighbor: VertexId,
    /// Weight of the edge.
    pub weight: Weight,
}

impl AdjacencyEntry {
    /// Creates a new entry.
    #[must_use]
    pub const fn new(neighbor: VertexId, weight: Weight) -> Self {
        Self { neighbor, weight }
    }
}

/// Ordered adjacency list of a single vertex.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    entries: SmallVec<[AdjacencyEntry; INLINE_ENTRIES]>,
}

impl AdjacencyList {
    /// Creates an empty adjacency list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, neighbor: VertexId, weight: Weight) {
        self.entries.push(AdjacencyEntry::new(neighbor, weight));
    }

    /// Removes the first entry pointing at `neighbor`.
    pub(crate) fn remove_first(&mut self, neighbor: VertexId) -> Option<AdjacencyEntry> {
        let pos = self.entries.iter().position(|e| e.neighbor == neighbor)?;
        Some(self.entries.remove(pos))
    }

    /// Removes every entry pointing at `neighbor`, returning how many were dropped.
    pub(crate) fn remove_all(&mut self, neighbor: VertexId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.neighbor != neighbor);
        before - self.entries.len()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyEntry> + '_ {
        self.entries.iter()
    }

    /// Iterates over neighbour ids in insertion order (duplicates included).
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries.iter().map(|e| e.neighbor)
    }

    /// Returns the entry at `index` in insertion order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AdjacencyEntry> {
        self.entries.get(index)
    }

    /// Returns the first entry pointing at `neighbor`.
    #[must_use]
    pub fn first_to(&self, neighbor: VertexId) -> Option<&AdjacencyEntry> {
        self.entries.iter().find(|e| e.neighbor == neighbor)
    }

    /// Returns `true` if any entry points at `neighbor`.
    #[must_use]
    pub fn contains(&self, neighbor: VertexId) -> bool {
        self.first_to(neighbor).is_some()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a AdjacencyEntry;
    type IntoIter = std::slice::Iter<'a, AdjacencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_push_keeps_order() {
        let mut adj = AdjacencyList::new();
        adj.push(v(2), 5);
        adj.push(v(1), 3);
        adj.push(v(3), 1);

        let neighbors: Vec<_> = adj.neighbors().collect();
        assert_eq!(neighbors, vec![v(2), v(1), v(3)]);
        assert_eq!(adj.len(), 3);
    }

    #[test]
    fn test_remove_first_only_removes_one() {
        let mut adj = AdjacencyList::new();
        adj.push(v(1), 4);
        adj.push(v(1), 9);

        let removed = adj.remove_first(v(1)).unwrap();
        assert_eq!(removed.weight, 4);
        assert_eq!(adj.len(), 1);
        assert_eq!(adj.first_to(v(1)).unwrap().weight, 9);
        assert!(adj.remove_first(v(7)).is_none());
    }

    #[test]
    fn test_remove_all() {
        let mut adj = AdjacencyList::new();
        adj.push(v(1), 1);
        adj.push(v(2), 1);
        adj.push(v(1), 2);

        assert_eq!(adj.remove_all(v(1)), 2);
        assert!(!adj.contains(v(1)));
        assert!(adj.contains(v(2)));
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut adj = AdjacencyList::new();
        for i in 0..10 {
            adj.push(v(i), i64::from(i));
        }
        assert_eq!(adj.len(), 10);
        assert_eq!(adj.iter().map(|e| e.weight).sum::<i64>(), 45);
        assert_eq!(adj.get(9).map(|e| e.neighbor), Some(v(9)));
        assert!(adj.get(10).is_none());
    }
}
