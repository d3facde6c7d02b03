//! Built-in sample script.

use anyhow::Result;
use grafos::GraphConfig;

use super::run::run_script;
use crate::OutputFormat;

/// Sample session: an undirected road map, then a directed cycle.
pub const DEMO_SCRIPT: &str = "\
# Undirected weighted graph
directed off
vertex A
vertex B
vertex C
vertex D
vertex
edge A B 4
edge B C 2
edge A C 5
edge C D 7
edge B D 1
list
adjacent A D
mst
bfs A
dfs A
dijkstra A
components
adjacency-matrix
incidence-matrix
coloring

# Directed graph with a cycle and an unreachable vertex
clear
directed on
vertex A
vertex B
vertex C
vertex D
edge A B 1
edge B C 1
edge C A 1
tree
components
incidence-matrix
";

/// Runs the sample script.
pub fn run(config: GraphConfig, format: OutputFormat, quiet: bool) -> Result<()> {
    run_script(DEMO_SCRIPT, config, format, quiet)
}
