//! # grafos-core
//!
//! Core layer for Grafos: the graph model, adjacency mutation and queries, and
//! matrix encoders.
//!
//! This crate provides the data structure every algorithm operates on. It
//! depends only on `grafos-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Graph model (vertices, transient edges, configuration, the store)
//! - [`index`] - Per-vertex adjacency lists
//! - [`matrix`] - Adjacency and incidence matrix encoders

pub mod graph;
pub mod index;
pub mod matrix;

// Re-export commonly used types
pub use graph::{Edge, Graph, GraphConfig, Vertex, total_weight};
pub use index::adjacency::{AdjacencyEntry, AdjacencyList};
pub use matrix::{AdjacencyMatrix, IncidenceMatrix};
