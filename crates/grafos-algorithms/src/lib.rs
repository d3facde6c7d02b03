//! # grafos-algorithms
//!
//! Graph algorithms over the [`grafos_core::Graph`] adjacency layer.
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - BFS and DFS spanning trees
//! - [`mst`] - Minimum spanning tree (Prim)
//! - [`shortest_path`] - Dijkstra and the mode-dependent spanning tree
//! - [`components`] - Connected and strongly connected components (Roy)
//! - [`coloring`] - Greedy vertex colouring (Welsh-Powell)
//!
//! ## Usage
//!
//! ```
//! use grafos_algorithms::{bfs, prim, roy};
//! use grafos_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! graph.add_edge(a, b, 3).unwrap();
//!
//! assert_eq!(bfs(&graph, a).unwrap().reached(), 2);
//! assert_eq!(prim(&graph).unwrap().total_weight, 3);
//! assert_eq!(roy(&graph).len(), 1);
//! ```

pub mod coloring;
pub mod components;
pub mod mst;
pub mod shortest_path;
pub mod traits;
pub mod traversal;

// Core trait
pub use traits::GraphAlgorithm;

// Traversal
pub use traversal::{BfsAlgorithm, DfsAlgorithm, TraversalTree, bfs, dfs};

// Optimization
pub use mst::{MstResult, PrimAlgorithm, prim};
pub use shortest_path::{
    DijkstraAlgorithm, ShortestPathTree, SpanningTree, SpanningTreeAlgorithm, dijkstra,
    spanning_tree,
};

// Connectivity
pub use components::{Component, ComponentSummary, ComponentsResult, RoyAlgorithm, roy};

// Colouring
pub use coloring::{Coloring, WelshPowellAlgorithm, welsh_powell};
