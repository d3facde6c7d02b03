//! # grafos-common
//!
//! Foundation layer for Grafos: identifier types, weights, errors, and utilities.
//!
//! This crate provides the fundamental building blocks used by all other
//! Grafos crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, Weight, Position)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Position, VertexId, Weight};
pub use utils::error::{Error, Result};
