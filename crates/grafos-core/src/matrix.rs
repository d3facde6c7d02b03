//! Adjacency and incidence matrix encoders.
//!
//! Both matrices are snapshots of the current graph. Rows follow vertex
//! insertion order; the vertex ids and names used for the rows are carried
//! along so a caller can label them without going back to the graph.

use std::cmp::Ordering;
use std::fmt::Write as _;

use grafos_common::types::{VertexId, Weight};
use serde::Serialize;

use crate::graph::{Edge, Graph};

/// `V x V` matrix of edge weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    /// Row/column vertex ids.
    pub vertices: Vec<VertexId>,
    /// Row/column vertex names.
    pub names: Vec<String>,
    /// `cells[i][j]` is the weight of an edge from vertex `i` to vertex `j`, 0 if none.
    pub cells: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Weight stored at `(row, column)`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Weight> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns `true` if `cells[i][j] == cells[j][i]` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (0..i).all(|j| self.cells[i][j] == self.cells[j][i]))
    }

    /// Renders the matrix as fixed-width text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("ADJACENCY MATRIX\n");
        out.push_str(&"=".repeat(50));
        out.push('\n');

        out.push_str("     ");
        for name in &self.names {
            let _ = write!(out, "{name:>4}");
        }
        out.push('\n');

        for (name, row) in self.names.iter().zip(&self.cells) {
            let _ = write!(out, "{name:>3}: ");
            for cell in row {
                let _ = write!(out, "{cell:>4}");
            }
            out.push('\n');
        }
        out
    }
}

/// `V x E` incidence matrix together with the edge behind each column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidenceMatrix {
    /// Row vertex ids.
    pub vertices: Vec<VertexId>,
    /// Row vertex names.
    pub names: Vec<String>,
    /// Column edges.
    pub edges: Vec<Edge>,
    /// `cells[i][j]` is the incidence of vertex `i` on edge `j`.
    pub cells: Vec<Vec<i32>>,
}

impl IncidenceMatrix {
    /// Number of edge columns.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Value stored at `(row, column)`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<i32> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Renders the matrix as fixed-width text, one column per edge label.
    #[must_use]
    pub fn to_text(&self) -> String {
        let width = self
            .edges
            .iter()
            .map(|e| e.label.chars().count())
            .max()
            .unwrap_or(0)
            .max(3)
            + 1;

        let mut out = String::new();
        out.push_str("INCIDENCE MATRIX\n");
        out.push_str(&"=".repeat(50));
        out.push('\n');

        out.push_str("     ");
        for edge in &self.edges {
            let _ = write!(out, "{:>width$}", edge.label);
        }
        out.push('\n');

        for (name, row) in self.names.iter().zip(&self.cells) {
            let _ = write!(out, "{name:>3}: ");
            for cell in row {
                let _ = write!(out, "{cell:>width$}");
            }
            out.push('\n');
        }
        out
    }
}

impl Graph {
    /// Builds the adjacency matrix.
    ///
    /// With parallel edges between the same ordered pair, the entry that comes
    /// last in the origin's adjacency list wins.
    #[must_use]
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
        let n = self.vertex_count();
        let mut cells = vec![vec![0; n]; n];

        for (i, vertex) in self.vertices().enumerate() {
            for entry in vertex.entries() {
                if let Some(j) = self.index_of(entry.neighbor) {
                    cells[i][j] = entry.weight;
                }
            }
        }

        AdjacencyMatrix {
            vertices: self.vertex_ids(),
            names: self.vertices().map(|v| v.name().to_string()).collect(),
            cells,
        }
    }

    /// Builds the incidence matrix.
    ///
    /// Directed graphs get one column per adjacency entry, `+1` at the origin
    /// and `-1` at the destination. Undirected graphs get one column per
    /// mirrored pair (the entry whose origin sorts first) plus one per
    /// self-loop, `+1` at both endpoints. Contributions are added, so a
    /// directed self-loop column is all zeros and an undirected one holds `2`.
    #[must_use]
    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        let directed = self.is_directed();
        let mut edges = Vec::new();

        for vertex in self.vertices() {
            for entry in vertex.entries() {
                let keep = directed
                    || entry.neighbor == vertex.id()
                    || self.canonical_cmp(vertex.id(), entry.neighbor) == Ordering::Less;
                if keep {
                    edges.push(self.edge_record(vertex.id(), entry.neighbor, entry.weight));
                }
            }
        }

        let mut cells = vec![vec![0i32; edges.len()]; self.vertex_count()];
        for (j, edge) in edges.iter().enumerate() {
            let (Some(origin), Some(destination)) =
                (self.index_of(edge.origin), self.index_of(edge.destination))
            else {
                continue;
            };
            cells[origin][j] += 1;
            cells[destination][j] += if directed { -1 } else { 1 };
        }

        IncidenceMatrix {
            vertices: self.vertex_ids(),
            names: self.vertices().map(|v| v.name().to_string()).collect(),
            edges,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_matrices() {
        let graph = Graph::new();
        let adjacency = graph.adjacency_matrix();
        assert_eq!(adjacency.size(), 0);
        assert!(adjacency.cells.is_empty());

        let incidence = graph.incidence_matrix();
        assert_eq!(incidence.edge_count(), 0);
        assert!(incidence.cells.is_empty());
    }

    #[test]
    fn test_adjacency_matrix_undirected_is_symmetric() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        graph.add_edge(a, b, 4).unwrap();
        graph.add_edge(b, c, 2).unwrap();

        let matrix = graph.adjacency_matrix();
        assert_eq!(matrix.cells, vec![vec![0, 4, 0], vec![4, 0, 2], vec![0, 2, 0]]);
        assert!(matrix.is_symmetric());
    }

    #[test]
    fn test_adjacency_matrix_directed() {
        let mut graph = Graph::new_directed();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        graph.add_edge(a, b, 3).unwrap();
        graph.add_edge(b, b, 1).unwrap();

        let matrix = graph.adjacency_matrix();
        assert_eq!(matrix.get(0, 1), Some(3));
        assert_eq!(matrix.get(1, 0), Some(0));
        assert_eq!(matrix.get(1, 1), Some(1));
        assert!(!matrix.is_symmetric());
    }

    #[test]
    fn test_adjacency_matrix_last_parallel_edge_wins() {
        let mut graph = Graph::new_directed();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        graph.add_edge(a, b, 3).unwrap();
        graph.add_edge(a, b, 8).unwrap();

        assert_eq!(graph.adjacency_matrix().get(0, 1), Some(8));
    }

    #[test]
    fn test_incidence_matrix_directed() {
        let mut graph = Graph::new_directed();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        graph.add_edge(a, b, 1).unwrap();
        graph.add_edge(c, b, 1).unwrap();

        let matrix = graph.incidence_matrix();
        let labels: Vec<_> = matrix.edges.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A->B", "C->B"]);
        assert_eq!(matrix.cells, vec![vec![1, 0], vec![-1, -1], vec![0, 1]]);
    }

    #[test]
    fn test_incidence_matrix_undirected_dedups_mirrors() {
        let mut graph = Graph::new();
        let b = graph.add_vertex("B");
        let a = graph.add_vertex("A");
        graph.add_edge(b, a, 5).unwrap();

        let matrix = graph.incidence_matrix();
        assert_eq!(matrix.edge_count(), 1);
        assert_eq!(matrix.edges[0].origin, a);
        assert_eq!(matrix.edges[0].destination, b);
        assert_eq!(matrix.cells, vec![vec![1], vec![1]]);
    }

    #[test]
    fn test_incidence_matrix_self_loops() {
        let mut undirected = Graph::new();
        let a = undirected.add_vertex("A");
        undirected.add_edge(a, a, 1).unwrap();
        let matrix = undirected.incidence_matrix();
        assert_eq!(matrix.cells, vec![vec![2]]);

        let mut directed = Graph::new_directed();
        let x = directed.add_vertex("X");
        directed.add_edge(x, x, 1).unwrap();
        let matrix = directed.incidence_matrix();
        assert_eq!(matrix.cells, vec![vec![0]]);
    }

    #[test]
    fn test_incidence_matrix_same_names_still_listed() {
        let mut graph = Graph::new();
        let first = graph.add_vertex("dup");
        let second = graph.add_vertex("dup");
        graph.add_edge(second, first, 2).unwrap();

        let matrix = graph.incidence_matrix();
        assert_eq!(matrix.edge_count(), 1);
        assert_eq!(matrix.edges[0].origin, first);
    }

    #[test]
    fn test_to_text_layout() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        graph.add_edge(a, b, 4).unwrap();

        let text = graph.adjacency_matrix().to_text();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "ADJACENCY MATRIX");
        assert_eq!(lines[2], "        A   B");
        assert_eq!(lines[3], "  A:    0   4");
        assert_eq!(lines[4], "  B:    4   0");

        let text = graph.incidence_matrix().to_text();
        assert!(text.starts_with("INCIDENCE MATRIX\n"));
        assert!(text.contains("A-B"));
    }
}
