use collab_core::NodeId;
use collab_graph::{component_count, find_bridges, CollabGraph};
use proptest::prelude::*;

fn graph_from_pairs(n: usize, pairs: &[(usize, usize)]) -> CollabGraph {
    let mut graph = CollabGraph::new();
    let nodes: Vec<NodeId> = (0..n).map(|i| graph.add_node(i as u64)).collect();
    for &(a, b) in pairs {
        if a != b {
            graph.add_edge(nodes[a], nodes[b]).unwrap();
        }
    }
    graph
}

fn brute_force_bridges(graph: &CollabGraph) -> Vec<(NodeId, NodeId)> {
    let baseline = component_count(graph);
    let mut scratch = graph.clone();
    let mut found = Vec::new();
    for (a, b) in graph.edges() {
        scratch.remove_edge(a, b).unwrap();
        if component_count(&scratch) > baseline {
            found.push((a, b));
        }
        scratch.add_edge(a, b).unwrap();
    }
    found
}

#[test]
fn path_edges_are_all_bridges() {
    let graph = graph_from_pairs(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
    assert_eq!(find_bridges(&graph), graph.edges());
}

#[test]
fn cycle_has_no_bridges() {
    let graph = graph_from_pairs(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert!(find_bridges(&graph).is_empty());
}

#[test]
fn pendant_on_triangle_is_the_only_bridge() {
    let graph = graph_from_pairs(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
    let bridges = find_bridges(&graph);
    assert_eq!(bridges, vec![(NodeId::from_raw(2), NodeId::from_raw(3))]);
}

proptest! {
    #[test]
    fn low_link_matches_brute_force(
        n in 2usize..12,
        pairs in proptest::collection::vec((0usize..12, 0usize..12), 0..30),
    ) {
        let pairs: Vec<(usize, usize)> = pairs
            .into_iter()
            .map(|(a, b)| (a % n, b % n))
            .collect();
        let graph = graph_from_pairs(n, &pairs);
        prop_assert_eq!(find_bridges(&graph), brute_force_bridges(&graph));
    }
}
