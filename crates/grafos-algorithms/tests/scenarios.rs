//! End-to-end checks of the algorithms on small hand-built graphs.

use grafos_algorithms::{
    ComponentSummary, GraphAlgorithm, PrimAlgorithm, RoyAlgorithm, SpanningTree, bfs, dfs,
    dijkstra, prim, roy, spanning_tree, welsh_powell,
};
use grafos_core::Graph;

#[test]
fn undirected_mst_skips_heaviest_triangle_edge() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    graph.add_edge(a, b, 4).unwrap();
    graph.add_edge(b, c, 2).unwrap();
    graph.add_edge(a, c, 5).unwrap();

    let mst = PrimAlgorithm.run(&graph).unwrap();
    assert_eq!(mst.total_weight, 6);
    assert_eq!(mst.len(), 2);
    assert!(mst.edges.iter().any(|e| e.connects(b, c) && e.weight == 2));
    assert!(mst.edges.iter().any(|e| e.connects(a, b) && e.weight == 4));
    assert!(!mst.edges.iter().any(|e| e.connects(a, c)));
}

#[test]
fn directed_cycle_is_one_strong_component() {
    let mut graph = Graph::new_directed();
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    graph.add_edge(a, b, 1).unwrap();
    graph.add_edge(b, c, 1).unwrap();
    graph.add_edge(c, a, 1).unwrap();

    let result = RoyAlgorithm.run(&graph).unwrap();
    assert_eq!(result.len(), 1);
    let mut members = result.components[0].vertices.clone();
    members.sort();
    assert_eq!(members, vec![a, b, c]);
    assert_eq!(result.summary, ComponentSummary::StronglyConnected);
}

#[test]
fn empty_graph_yields_empty_results() {
    for graph in [Graph::new(), Graph::new_directed()] {
        assert!(prim(&graph).unwrap().is_empty());
        assert_eq!(spanning_tree(&graph).unwrap().edges().len(), 0);
        assert!(roy(&graph).is_empty());
        assert_eq!(roy(&graph).summary, ComponentSummary::Empty);
        assert_eq!(welsh_powell(&graph).color_count, 0);
        assert_eq!(graph.adjacency_matrix().size(), 0);
        assert_eq!(graph.incidence_matrix().edge_count(), 0);
        assert_eq!(graph.list_adjacency(), "");
    }
}

#[test]
fn directed_shortest_path_tree_reports_unreachable() {
    let mut graph = Graph::new_directed();
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    graph.add_edge(a, b, 1).unwrap();

    let tree = dijkstra(&graph, a).unwrap();
    assert_eq!(tree.edges.len(), 1);
    assert_eq!(tree.edges[0].origin, a);
    assert_eq!(tree.edges[0].destination, b);
    assert_eq!(tree.edges[0].weight, 1);
    assert!(tree.unreachable.is_empty());

    let c = graph.add_vertex("C");
    let tree = dijkstra(&graph, a).unwrap();
    assert_eq!(tree.unreachable, vec![c]);
}

#[test]
fn tree_follows_direction_mode() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    graph.add_edge(a, b, 2).unwrap();
    assert!(matches!(spanning_tree(&graph).unwrap(), SpanningTree::Minimum(_)));

    graph.remove_edge(a, b).unwrap();
    graph.set_directed(true).unwrap();
    graph.add_edge(b, a, 2).unwrap();
    match spanning_tree(&graph).unwrap() {
        SpanningTree::ShortestPaths(tree) => assert_eq!(tree.origin, b),
        other => panic!("unexpected tree: {other:?}"),
    }
}

#[test]
fn removing_a_vertex_updates_every_algorithm() {
    let mut graph = Graph::new();
    let a = graph.add_vertex("A");
    let hub = graph.add_vertex("H");
    let c = graph.add_vertex("C");
    graph.add_edge(a, hub, 1).unwrap();
    graph.add_edge(hub, c, 1).unwrap();
    assert_eq!(bfs(&graph, a).unwrap().reached(), 3);

    graph.remove_vertex(hub).unwrap();
    assert_eq!(bfs(&graph, a).unwrap().reached(), 1);
    assert_eq!(dfs(&graph, c).unwrap().reached(), 1);
    assert_eq!(roy(&graph).summary, ComponentSummary::IsolatedVertices);
    assert_eq!(welsh_powell(&graph).color_count, 1);
}
