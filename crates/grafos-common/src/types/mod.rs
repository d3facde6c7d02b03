//! Core type definitions for Grafos.
//!
//! This module contains the fundamental types shared by the graph and its algorithms:
//! - Identifier types ([`VertexId`])
//! - Edge weights ([`Weight`])
//! - Display metadata ([`Position`])

mod id;
mod position;

pub use id::VertexId;
pub use position::Position;

/// Integer edge weight.
///
/// Weights are plain signed integers. Whether negative values are accepted is
/// decided by the graph configuration, not by the type.
pub type Weight = i64;
