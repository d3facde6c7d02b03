//! # Grafos
//!
//! Build weighted graphs, directed or undirected, and run classical graph
//! algorithms over them.
//!
//! Start with [`Graph`]: add vertices by name, connect them with integer
//! weights, then hand the graph to any of the algorithms below. Results are
//! plain values that reference vertices by [`VertexId`]; they never observe
//! later mutations of the graph.
//!
//! ## Algorithms
//!
//! | Function | Algorithm | Notes |
//! | -------- | --------- | ----- |
//! | [`bfs`], [`dfs`] | Traversal | Spanning tree of the origin's reach |
//! | [`prim`] | Minimum spanning tree | Undirected graphs only |
//! | [`dijkstra`] | Shortest paths | Non-negative weights |
//! | [`spanning_tree`] | Prim or Dijkstra | Chosen by direction mode |
//! | [`roy`] | Components | Strongly connected when directed |
//! | [`welsh_powell`] | Vertex colouring | Greedy, highest degree first |
//!
//! [`Graph::adjacency_matrix`] and [`Graph::incidence_matrix`] render the
//! graph's structure as matrices.
//!
//! ## Quick Start
//!
//! ```rust
//! use grafos::{Graph, prim};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! graph.add_edge(a, b, 4)?;
//! graph.add_edge(b, c, 2)?;
//! graph.add_edge(a, c, 5)?;
//!
//! let mst = prim(&graph)?;
//! assert_eq!(mst.total_weight, 6);
//! # Ok::<(), grafos::Error>(())
//! ```

// Re-export the graph model
pub use grafos_core::{
    AdjacencyEntry, AdjacencyList, AdjacencyMatrix, Edge, Graph, GraphConfig, IncidenceMatrix,
    Vertex, total_weight,
};

// Re-export the algorithms
pub use grafos_algorithms::{
    BfsAlgorithm, Coloring, Component, ComponentSummary, ComponentsResult, DfsAlgorithm,
    DijkstraAlgorithm, GraphAlgorithm, MstResult, PrimAlgorithm, RoyAlgorithm, ShortestPathTree,
    SpanningTree, SpanningTreeAlgorithm, TraversalTree, WelshPowellAlgorithm, bfs, dfs, dijkstra,
    prim, roy, spanning_tree, welsh_powell,
};

// Re-export common types - ids, weights and the error type
pub use grafos_common::types::{Position, VertexId, Weight};
pub use grafos_common::utils::error::{Error, Result};
