use collab_graph::{
    component_count, connected_components, largest_component, node_component, CollabGraph,
};
use collab_core::NodeLabel;

fn two_pairs_and_triangle() -> CollabGraph {
    let mut graph = CollabGraph::new();
    graph.add_edge_by_label("a", "b").unwrap();
    graph.add_edge_by_label("c", "d").unwrap();
    graph.add_edge_by_label("x", "y").unwrap();
    graph.add_edge_by_label("y", "z").unwrap();
    graph.add_edge_by_label("z", "x").unwrap();
    graph.add_node("lonely");
    graph
}

#[test]
fn components_follow_insertion_order() {
    let graph = two_pairs_and_triangle();
    let sizes: Vec<usize> = connected_components(&graph).iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 2, 3, 1]);
    assert_eq!(component_count(&graph), 4);
}

#[test]
fn largest_component_prefers_last_of_equal_size() {
    let mut graph = CollabGraph::new();
    graph.add_edge_by_label("a", "b").unwrap();
    graph.add_edge_by_label("c", "d").unwrap();
    let lcc = largest_component(&graph).unwrap();
    let labels: Vec<&NodeLabel> = lcc.iter().map(|n| graph.label(*n)).collect();
    assert_eq!(labels, vec![&NodeLabel::from("c"), &NodeLabel::from("d")]);

    let graph = two_pairs_and_triangle();
    assert_eq!(largest_component(&graph).unwrap().len(), 3);
    assert!(largest_component(&CollabGraph::new()).is_none());
}

#[test]
fn component_membership_tracks_mutation() {
    let mut graph = two_pairs_and_triangle();
    let a = graph.node_by_label(&"a".into()).unwrap();
    let c = graph.node_by_label(&"c".into()).unwrap();
    assert_eq!(node_component(&graph, a).len(), 2);
    graph.add_edge(a, c).unwrap();
    assert_eq!(node_component(&graph, a).len(), 4);
}
