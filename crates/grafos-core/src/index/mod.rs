//! Index structures backing the graph.
//!
//! - [`adjacency`] - Ordered per-vertex adjacency lists

pub mod adjacency;

pub use adjacency::{AdjacencyEntry, AdjacencyList};
