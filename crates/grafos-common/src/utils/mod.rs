//! Utility modules: error types and hashing helpers.

pub mod error;
pub mod hash;
