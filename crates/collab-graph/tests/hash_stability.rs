use collab_graph::{canonical_hash, CollabGraph};

#[test]
fn hash_ignores_insertion_order() {
    let mut forward = CollabGraph::new();
    forward.add_edge_by_label("a", "b").unwrap();
    forward.add_edge_by_label("b", "c").unwrap();

    let mut backward = CollabGraph::new();
    backward.add_edge_by_label("c", "b").unwrap();
    backward.add_edge_by_label("b", "a").unwrap();

    assert_eq!(canonical_hash(&forward), canonical_hash(&backward));
}

#[test]
fn hash_changes_with_edges() {
    let mut graph = CollabGraph::new();
    graph.add_edge_by_label("a", "b").unwrap();
    let before = canonical_hash(&graph);
    let a = graph.node_by_label(&"a".into()).unwrap();
    let b = graph.node_by_label(&"b".into()).unwrap();
    graph.remove_edge(a, b).unwrap();
    assert_ne!(before, canonical_hash(&graph));
}
