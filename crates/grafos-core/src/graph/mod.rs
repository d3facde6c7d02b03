//! Graph model: vertices, transient edges, and the graph store.
//!
//! - [`Graph`] - the ordered vertex container and adjacency mutation/query API
//! - [`Vertex`] - a named vertex owning its adjacency entries
//! - [`Edge`] - transient edge record produced by algorithms
//! - [`GraphConfig`] - direction mode and mutation policies

mod config;
mod edge;
mod store;
mod vertex;

pub use config::GraphConfig;
pub use edge::{Edge, total_weight};
pub use store::Graph;
pub use vertex::Vertex;
