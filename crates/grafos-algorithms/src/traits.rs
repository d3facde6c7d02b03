//! Common interface for graph algorithms.

use grafos_common::utils::error::Result;
use grafos_core::Graph;

/// A graph algorithm runnable against a [`Graph`] snapshot.
///
/// Every algorithm in this crate has a free function (`bfs`, `prim`, ...) and
/// a small wrapper struct implementing this trait, so collaborators can hold
/// a configured algorithm and dispatch on it uniformly. Parameters such as
/// the origin vertex live in the wrapper.
pub trait GraphAlgorithm {
    /// Value produced by a run.
    type Output;

    /// Short identifier of the algorithm.
    fn name(&self) -> &'static str;

    /// One-line human-readable description.
    fn description(&self) -> &'static str {
        ""
    }

    /// Runs the algorithm.
    ///
    /// The output is a value snapshot; it is not kept in sync with later
    /// mutations of `graph`.
    fn run(&self, graph: &Graph) -> Result<Self::Output>;
}
