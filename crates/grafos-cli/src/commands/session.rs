//! Executes parsed script commands against one graph.

use anyhow::{Result, anyhow};
use grafos::{
    AdjacencyMatrix, Edge, Graph, GraphConfig, IncidenceMatrix, SpanningTree, TraversalTree,
    VertexId, Weight,
};
use serde::Serialize;

use super::script::Command;

/// One row of an edge listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRow {
    /// Display label (`A-B` or `A->B`).
    pub label: String,
    /// Origin name.
    pub from: String,
    /// Destination name.
    pub to: String,
    /// Edge weight.
    pub weight: Weight,
}

/// Distance of one vertex from a shortest-path origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceRow {
    /// Vertex name.
    pub vertex: String,
    /// `None` when unreachable.
    pub distance: Option<Weight>,
}

/// One component as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRow {
    /// Member names.
    pub vertices: Vec<String>,
    /// Induced edge labels.
    pub edges: Vec<String>,
}

/// What a command produced, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Outcome of a mutation.
    Status {
        /// Human-readable message.
        message: String,
    },
    /// Answer to `adjacent`.
    Adjacency {
        /// First vertex name.
        first: String,
        /// Second vertex name.
        second: String,
        /// Whether an edge joins them.
        adjacent: bool,
    },
    /// Adjacency listing, one vertex per line.
    Listing {
        /// Rendered lines.
        lines: Vec<String>,
    },
    /// A set of tree edges (MST or shortest-path tree).
    Tree {
        /// Heading.
        title: String,
        /// Tree edges.
        edges: Vec<EdgeRow>,
        /// Sum of the weights, for spanning trees.
        total_weight: Option<Weight>,
        /// Vertices a shortest-path tree cannot reach.
        unreachable: Vec<String>,
        /// Distances, for shortest-path trees.
        distances: Vec<DistanceRow>,
    },
    /// A BFS or DFS run.
    Traversal {
        /// `BFS` or `DFS`.
        algorithm: String,
        /// Origin name.
        origin: String,
        /// Visit order.
        order: Vec<String>,
        /// Tree edges.
        edges: Vec<EdgeRow>,
    },
    /// Result of `components`.
    Components {
        /// Non-trivial components.
        components: Vec<ComponentRow>,
        /// Summary line, possibly empty.
        summary: String,
    },
    /// Result of `adjacency-matrix`.
    AdjacencyMatrix {
        /// The matrix.
        matrix: AdjacencyMatrix,
    },
    /// Result of `incidence-matrix`.
    IncidenceMatrix {
        /// The matrix.
        matrix: IncidenceMatrix,
    },
    /// Result of `coloring`.
    Coloring {
        /// Number of colours.
        color_count: usize,
        /// Vertex names per colour.
        classes: Vec<Vec<String>>,
    },
}

impl Report {
    fn status(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
        }
    }
}

/// The graph a script builds, plus the logic mapping commands onto it.
pub struct Session {
    graph: Graph,
}

impl Session {
    /// Creates a session over an empty graph.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            graph: Graph::with_config(config),
        }
    }

    /// The graph built so far.
    #[allow(dead_code)]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Looks a vertex up by name, listing the known names when it is absent.
    fn resolve(&self, name: &str) -> Result<VertexId> {
        self.graph.vertex_id(name).ok_or_else(|| {
            if self.graph.is_empty() {
                anyhow!("unknown vertex '{name}': the graph has no vertices")
            } else {
                let available: Vec<&str> = self.graph.vertices().map(|v| v.name()).collect();
                anyhow!(
                    "unknown vertex '{name}' (available: {})",
                    available.join(", ")
                )
            }
        })
    }

    fn name_of(&self, id: VertexId) -> String {
        self.graph.name(id).unwrap_or("?").to_string()
    }

    fn names(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter().map(|&id| self.name_of(id)).collect()
    }

    fn edge_row(&self, edge: &Edge) -> EdgeRow {
        EdgeRow {
            label: edge.label.clone(),
            from: self.name_of(edge.origin),
            to: self.name_of(edge.destination),
            weight: edge.weight,
        }
    }

    fn edge_rows(&self, edges: &[Edge]) -> Vec<EdgeRow> {
        edges.iter().map(|e| self.edge_row(e)).collect()
    }

    fn traversal_report(&self, algorithm: &str, tree: &TraversalTree) -> Report {
        Report::Traversal {
            algorithm: algorithm.to_string(),
            origin: self.name_of(tree.origin),
            order: self.names(&tree.order),
            edges: self.edge_rows(&tree.edges),
        }
    }

    fn shortest_paths_report(&self, tree: &grafos::ShortestPathTree) -> Report {
        Report::Tree {
            title: format!(
                "Shortest-path tree from {} (Dijkstra)",
                self.name_of(tree.origin)
            ),
            edges: self.edge_rows(&tree.edges),
            total_weight: None,
            unreachable: self.names(&tree.unreachable),
            distances: tree
                .distances
                .iter()
                .map(|&(id, distance)| DistanceRow {
                    vertex: self.name_of(id),
                    distance,
                })
                .collect(),
        }
    }

    fn minimum_tree_report(&self, mst: &grafos::MstResult) -> Report {
        Report::Tree {
            title: "Minimum spanning tree (Prim)".to_string(),
            edges: self.edge_rows(&mst.edges),
            total_weight: Some(mst.total_weight),
            unreachable: Vec::new(),
            distances: Vec::new(),
        }
    }

    /// Applies one command.
    pub fn execute(&mut self, command: Command) -> Result<Report> {
        tracing::debug!(?command, "executing");
        let report = match command {
            Command::Directed(directed) => {
                self.graph.set_directed(directed)?;
                let mode = if directed { "directed" } else { "undirected" };
                Report::status(format!("graph is now {mode}"))
            }
            Command::Negative(allow) => {
                self.graph.set_allow_negative_weights(allow);
                let verb = if allow { "allowed" } else { "rejected" };
                Report::status(format!("negative weights {verb}"))
            }
            Command::Vertex(name) => {
                let id = match name {
                    Some(name) => self.graph.add_vertex(name),
                    None => self.graph.add_vertex_auto(),
                };
                Report::status(format!("added vertex {} ({id})", self.name_of(id)))
            }
            Command::Edge { from, to, weight } => {
                let (u, v) = (self.resolve(&from)?, self.resolve(&to)?);
                self.graph.add_edge(u, v, weight)?;
                let label = self.graph.edge_record(u, v, weight).label;
                Report::status(format!("added edge {label} ({weight})"))
            }
            Command::RemoveVertex(name) => {
                let id = self.resolve(&name)?;
                let removed = self.graph.remove_vertex(id)?;
                Report::status(format!("removed vertex {}", removed.name()))
            }
            Command::RemoveEdge { from, to } => {
                let (u, v) = (self.resolve(&from)?, self.resolve(&to)?);
                let label = self.graph.edge_record(u, v, 0).label;
                if self.graph.remove_edge(u, v)? {
                    Report::status(format!("removed edge {label}"))
                } else {
                    Report::status(format!("no edge {label} to remove"))
                }
            }
            Command::Adjacent(first, second) => {
                self.resolve(&first)?;
                self.resolve(&second)?;
                let adjacent = self.graph.are_adjacent(&first, &second);
                Report::Adjacency {
                    first,
                    second,
                    adjacent,
                }
            }
            Command::List => Report::Listing {
                lines: self
                    .graph
                    .list_adjacency()
                    .lines()
                    .map(str::to_string)
                    .collect(),
            },
            Command::Mst => self.minimum_tree_report(&grafos::prim(&self.graph)?),
            Command::Tree => match grafos::spanning_tree(&self.graph)? {
                SpanningTree::Minimum(mst) => self.minimum_tree_report(&mst),
                SpanningTree::ShortestPaths(tree) => self.shortest_paths_report(&tree),
                SpanningTree::Empty => Report::status("no edges: nothing to root a tree at"),
            },
            Command::Dijkstra(origin) => {
                let origin = self.resolve(&origin)?;
                self.shortest_paths_report(&grafos::dijkstra(&self.graph, origin)?)
            }
            Command::Bfs(origin) => {
                let origin = self.resolve(&origin)?;
                self.traversal_report("BFS", &grafos::bfs(&self.graph, origin)?)
            }
            Command::Dfs(origin) => {
                let origin = self.resolve(&origin)?;
                self.traversal_report("DFS", &grafos::dfs(&self.graph, origin)?)
            }
            Command::Components => {
                let result = grafos::roy(&self.graph);
                Report::Components {
                    components: result
                        .components
                        .iter()
                        .map(|c| ComponentRow {
                            vertices: self.names(&c.vertices),
                            edges: c.edges.iter().map(|e| e.label.clone()).collect(),
                        })
                        .collect(),
                    summary: result.message().to_string(),
                }
            }
            Command::AdjacencyMatrix => Report::AdjacencyMatrix {
                matrix: self.graph.adjacency_matrix(),
            },
            Command::IncidenceMatrix => Report::IncidenceMatrix {
                matrix: self.graph.incidence_matrix(),
            },
            Command::Coloring => {
                let coloring = grafos::welsh_powell(&self.graph);
                Report::Coloring {
                    color_count: coloring.color_count,
                    classes: coloring
                        .classes()
                        .iter()
                        .map(|class| self.names(class))
                        .collect(),
                }
            }
            Command::Clear => {
                self.graph.clear();
                Report::status("graph cleared")
            }
        };
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::script::parse_line;

    fn run(session: &mut Session, line: &str) -> Result<Report> {
        let command = parse_line(line)?.expect("not a command line");
        session.execute(command)
    }

    fn session_with(lines: &[&str]) -> Session {
        let mut session = Session::new(GraphConfig::default());
        for line in lines {
            run(&mut session, line).unwrap();
        }
        session
    }

    #[test]
    fn test_build_and_list() {
        let mut session = session_with(&["vertex A", "vertex B", "vertex", "edge A B 3"]);
        assert_eq!(session.graph().vertex_count(), 3);

        let report = run(&mut session, "list").unwrap();
        assert_eq!(
            report,
            Report::Listing {
                lines: vec![
                    "A → B(3)".to_string(),
                    "B → A(3)".to_string(),
                    "V1 → (isolated)".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_unknown_vertex_lists_available() {
        let mut session = session_with(&["vertex A", "vertex B"]);
        let err = run(&mut session, "bfs Z").unwrap_err();
        assert_eq!(err.to_string(), "unknown vertex 'Z' (available: A, B)");

        let mut empty = Session::new(GraphConfig::default());
        let err = run(&mut empty, "dfs A").unwrap_err();
        assert!(err.to_string().contains("no vertices"));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let mut session = session_with(&["vertex Lisbon", "vertex Porto", "edge lisbon PORTO 5"]);
        let report = run(&mut session, "adjacent porto LISBON").unwrap();
        assert!(matches!(report, Report::Adjacency { adjacent: true, .. }));
    }

    #[test]
    fn test_mst_report() {
        let mut session = session_with(&[
            "vertex A",
            "vertex B",
            "vertex C",
            "edge A B 4",
            "edge B C 2",
            "edge A C 5",
        ]);
        match run(&mut session, "mst").unwrap() {
            Report::Tree {
                edges,
                total_weight,
                ..
            } => {
                assert_eq!(total_weight, Some(6));
                let labels: Vec<_> = edges.iter().map(|e| e.label.as_str()).collect();
                assert_eq!(labels, vec!["A-B", "B-C"]);
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn test_directed_tree_and_components() {
        let mut session = session_with(&[
            "directed on",
            "vertex A",
            "vertex B",
            "vertex C",
            "edge A B",
            "edge B C",
            "edge C A",
        ]);
        match run(&mut session, "tree").unwrap() {
            Report::Tree {
                title, unreachable, ..
            } => {
                assert!(title.contains("from A"));
                assert!(unreachable.is_empty());
            }
            other => panic!("unexpected report: {other:?}"),
        }
        match run(&mut session, "components").unwrap() {
            Report::Components {
                components,
                summary,
            } => {
                assert_eq!(components.len(), 1);
                assert_eq!(components[0].vertices, vec!["A", "B", "C"]);
                assert_eq!(summary, "strongly connected graph");
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn test_direction_locked_and_mst_refused() {
        let mut session = session_with(&["vertex A", "vertex B", "edge A B"]);
        assert!(run(&mut session, "directed on").is_err());

        let mut session = session_with(&["directed on", "vertex A"]);
        let err = run(&mut session, "mst").unwrap_err();
        assert_eq!(err.to_string(), "algorithm requires an undirected graph");
    }

    #[test]
    fn test_negative_weights_policy() {
        let mut session = session_with(&["vertex A", "vertex B"]);
        assert!(run(&mut session, "edge A B -2").is_err());
        run(&mut session, "negative on").unwrap();
        assert!(run(&mut session, "edge A B -2").is_ok());
    }

    #[test]
    fn test_remove_edge_missing_is_not_an_error() {
        let mut session = session_with(&["vertex A", "vertex B"]);
        let report = run(&mut session, "remove-edge A B").unwrap();
        assert_eq!(report, Report::status("no edge A-B to remove"));
    }

    #[test]
    fn test_clear_restarts_naming() {
        let mut session = session_with(&["vertex", "vertex", "clear"]);
        assert!(session.graph().is_empty());
        let report = run(&mut session, "vertex").unwrap();
        assert_eq!(report, Report::status("added vertex V1 (#0)"));
    }
}
