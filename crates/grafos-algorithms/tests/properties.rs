//! Property-based tests over small random graphs.

use grafos_algorithms::{bfs, dfs, dijkstra, prim, roy, welsh_powell};
use grafos_common::types::{VertexId, Weight};
use grafos_common::utils::hash::FxHashSet;
use grafos_core::Graph;
use proptest::prelude::*;

/// Raw edge list with endpoints reduced modulo the vertex count.
fn build(directed: bool, n: usize, edges: &[(usize, usize, Weight)]) -> (Graph, Vec<VertexId>) {
    let mut graph = if directed {
        Graph::new_directed()
    } else {
        Graph::new()
    };
    let ids: Vec<VertexId> = (0..n).map(|_| graph.add_vertex_auto()).collect();
    if n > 0 {
        for &(u, v, w) in edges {
            graph.add_edge(ids[u % n], ids[v % n], w).unwrap();
        }
    }
    (graph, ids)
}

fn graph_input() -> impl Strategy<Value = (usize, Vec<(usize, usize, Weight)>)> {
    (0usize..7, prop::collection::vec((0usize..7, 0usize..7, 0i64..20), 0..14))
}

fn reach(graph: &Graph, origin: VertexId) -> FxHashSet<VertexId> {
    bfs(graph, origin).unwrap().order.into_iter().collect()
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

/// Kruskal over the full edge list; total weight of the forest edges inside
/// the component of `root`.
fn kruskal_component_weight(
    graph: &Graph,
    ids: &[VertexId],
    root: VertexId,
    edges: &[(usize, usize, Weight)],
) -> Weight {
    let n = ids.len();
    let mut parent: Vec<usize> = (0..n).collect();
    let component = reach(graph, root);
    let mut sorted: Vec<_> = edges.iter().map(|&(u, v, w)| (u % n, v % n, w)).collect();
    sorted.sort_by_key(|&(_, _, w)| w);

    let mut total = 0;
    for (u, v, w) in sorted {
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        if ru != rv {
            parent[ru] = rv;
            if component.contains(&ids[u]) {
                total += w;
            }
        }
    }
    total
}

proptest! {
    #[test]
    fn removed_vertex_leaves_no_references(
        directed in any::<bool>(),
        (n, edges) in graph_input(),
        victim in 0usize..7,
    ) {
        prop_assume!(n > 0);
        let (mut graph, ids) = build(directed, n, &edges);
        let victim = ids[victim % n];

        graph.remove_vertex(victim).unwrap();
        prop_assert_eq!(graph.vertex_count(), n - 1);
        prop_assert!(!graph.contains(victim));
        for vertex in graph.vertices() {
            prop_assert!(!vertex.has_entry_to(victim));
        }
    }

    #[test]
    fn undirected_entries_are_mirrored((n, edges) in graph_input()) {
        let (graph, _) = build(false, n, &edges);
        for vertex in graph.vertices() {
            for entry in vertex.entries() {
                let other = graph.vertex(entry.neighbor).unwrap();
                prop_assert!(other.has_entry_to(vertex.id()));
            }
        }
        prop_assert!(graph.adjacency_matrix().is_symmetric());
    }

    #[test]
    fn prim_spans_start_component_minimally((n, edges) in graph_input()) {
        prop_assume!(n > 0);
        let (graph, ids) = build(false, n, &edges);
        let mst = prim(&graph).unwrap();

        let component = reach(&graph, ids[0]);
        prop_assert_eq!(mst.len(), component.len() - 1);
        prop_assert_eq!(mst.total_weight, kruskal_component_weight(&graph, &ids, ids[0], &edges));
        for edge in &mst.edges {
            prop_assert!(component.contains(&edge.origin));
            prop_assert!(component.contains(&edge.destination));
            prop_assert!(!edge.is_self_loop());
        }
    }

    #[test]
    fn dijkstra_distances_are_consistent(
        directed in any::<bool>(),
        (n, edges) in graph_input(),
        origin in 0usize..7,
    ) {
        prop_assume!(n > 0);
        let (graph, ids) = build(directed, n, &edges);
        let origin = ids[origin % n];
        let tree = dijkstra(&graph, origin).unwrap();

        prop_assert_eq!(tree.distance_to(origin), Some(0));
        for edge in &tree.edges {
            let from = tree.distance_to(edge.origin).unwrap();
            prop_assert_eq!(tree.distance_to(edge.destination), Some(from + edge.weight));
        }
        for vertex in graph.vertices() {
            let Some(base) = tree.distance_to(vertex.id()) else { continue };
            for entry in vertex.entries() {
                let reached = tree.distance_to(entry.neighbor).unwrap();
                prop_assert!(reached <= base + entry.weight);
            }
        }

        let reachable = reach(&graph, origin);
        prop_assert_eq!(tree.edges.len(), reachable.len() - 1);
        for id in &ids {
            prop_assert_eq!(tree.unreachable.contains(id), !reachable.contains(id));
        }
    }

    #[test]
    fn traversals_visit_each_reachable_vertex_once(
        directed in any::<bool>(),
        (n, edges) in graph_input(),
        origin in 0usize..7,
    ) {
        prop_assume!(n > 0);
        let (graph, ids) = build(directed, n, &edges);
        let origin = ids[origin % n];

        let breadth = bfs(&graph, origin).unwrap();
        let depth = dfs(&graph, origin).unwrap();
        for tree in [&breadth, &depth] {
            let unique: FxHashSet<_> = tree.order.iter().copied().collect();
            prop_assert_eq!(unique.len(), tree.order.len());
            prop_assert_eq!(tree.edges.len(), tree.order.len() - 1);
            prop_assert_eq!(tree.order[0], origin);
        }
        let breadth_set: FxHashSet<_> = breadth.order.iter().copied().collect();
        let depth_set: FxHashSet<_> = depth.order.iter().copied().collect();
        prop_assert_eq!(breadth_set, depth_set);
    }

    #[test]
    fn roy_components_are_disjoint_and_mutually_reachable(
        directed in any::<bool>(),
        (n, edges) in graph_input(),
    ) {
        let (graph, _) = build(directed, n, &edges);
        let result = roy(&graph);

        let mut seen = FxHashSet::default();
        for component in &result.components {
            for &v in &component.vertices {
                prop_assert!(seen.insert(v));
            }
            for &u in &component.vertices {
                let from_u = reach(&graph, u);
                for v in &component.vertices {
                    prop_assert!(from_u.contains(v));
                }
            }
        }
        prop_assert!(seen.len() <= graph.vertex_count());
    }

    #[test]
    fn coloring_is_proper(directed in any::<bool>(), (n, edges) in graph_input()) {
        let (graph, ids) = build(directed, n, &edges);
        let coloring = welsh_powell(&graph);

        prop_assert!(coloring.is_proper(&graph));
        prop_assert_eq!(coloring.assignments.len(), ids.len());
        prop_assert!(coloring.color_count <= ids.len());
    }
}
