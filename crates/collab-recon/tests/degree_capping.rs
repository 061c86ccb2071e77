use collab_core::{NodeAttributes, NodeId, NodeLabel};
use collab_graph::CollabGraph;
use collab_recon::{cap_degrees, degree_target, tier_of, Tier};

struct Star {
    graph: CollabGraph,
    hub: NodeId,
    leaves: Vec<NodeId>,
}

/// Hub with ten leaves spanning every tier plus one leaf-to-leaf edge.
fn tiered_star() -> Star {
    let mut graph = CollabGraph::new();
    let hub = graph.add_node("hub");
    graph
        .set_attributes(hub, NodeAttributes::new("SG", "NTU", "ml"))
        .unwrap();

    let profiles: [(&str, Option<NodeAttributes>); 10] = [
        ("s1", Some(NodeAttributes::new("SG", "NTU", "ml"))),
        ("s2", Some(NodeAttributes::new("SG", "NTU", "ml"))),
        ("o1", Some(NodeAttributes::new("SG", "NTU", "vision"))),
        ("o2", Some(NodeAttributes::new("SG", "NUS", "ml"))),
        ("m1", Some(NodeAttributes::new("US", "MIT", "ml"))),
        ("m2", Some(NodeAttributes::new("SG", "NUS", "vision"))),
        ("m3", Some(NodeAttributes::new("US", "MIT", "vision"))),
        ("f1", None),
        ("f2", None),
        ("f3", None),
    ];
    let mut leaves = Vec::new();
    for (label, attrs) in profiles {
        let leaf = graph.add_node(label);
        if let Some(attrs) = attrs {
            graph.set_attributes(leaf, attrs).unwrap();
        }
        graph.add_edge(hub, leaf).unwrap();
        leaves.push(leaf);
    }
    graph.add_edge(leaves[8], leaves[9]).unwrap();
    Star { graph, hub, leaves }
}

#[test]
fn tiers_follow_attribute_difference() {
    let star = tiered_star();
    let tiers: Vec<Tier> = star
        .leaves
        .iter()
        .map(|leaf| tier_of(&star.graph, star.hub, *leaf))
        .collect();
    assert_eq!(
        tiers,
        vec![
            Tier::Same,
            Tier::Same,
            Tier::OneDifference,
            Tier::OneDifference,
            Tier::MultiDifference,
            Tier::MultiDifference,
            Tier::MultiDifference,
            Tier::Fallback,
            Tier::Fallback,
            Tier::Fallback,
        ]
    );
}

#[test]
fn hub_walks_through_all_four_tiers() {
    let mut star = tiered_star();
    assert_eq!(star.graph.node_count(), 11);
    assert_eq!(star.graph.edge_count(), 11);
    let kmax = degree_target(&star.graph).unwrap();
    assert_eq!(kmax, 1.0);

    let report = cap_degrees(&mut star.graph, kmax).unwrap();
    assert_eq!(report.kmax, 1.0);
    assert_eq!(report.capped_nodes, 1);
    assert_eq!(report.removed.same, 2);
    assert_eq!(report.removed.one_difference, 2);
    assert_eq!(report.removed.multi_difference, 3);
    assert_eq!(report.removed.fallback, 2);
    assert_eq!(report.residual_violations, 0);

    let removed: Vec<String> = report
        .removals
        .iter()
        .map(|removal| removal.neighbour.to_string())
        .collect();
    assert_eq!(
        removed,
        vec!["s1", "s2", "o1", "o2", "m1", "m2", "m3", "f2", "f3"]
    );

    assert_eq!(star.graph.degree(star.hub), 1);
    assert_eq!(star.graph.neighbors(star.hub), &[star.leaves[7]]);
    assert!(star.graph.has_edge(star.leaves[8], star.leaves[9]));
    assert_eq!(star.graph.edge_count(), 2);
}

#[test]
fn capping_stops_after_the_first_sufficient_tier() {
    let mut star = tiered_star();
    // threshold high enough that dropping the two tier-0 leaves suffices
    let report = cap_degrees(&mut star.graph, 8.0).unwrap();
    assert_eq!(report.removed.total(), 2);
    assert!(report.removals.iter().all(|r| r.tier == Tier::Same));
    assert_eq!(star.graph.degree(star.hub), 8);
}

#[test]
fn whole_tier_removal_can_overshoot_the_target() {
    // path a-b-c-d plus chord a-c, all attributes identical
    let mut graph = CollabGraph::new();
    let mut ids = Vec::new();
    for label in ["a", "b", "c", "d"] {
        let node = graph.add_node(label);
        graph
            .set_attributes(node, NodeAttributes::new("SG", "NTU", "ml"))
            .unwrap();
        ids.push(node);
    }
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    graph.add_edge(a, b).unwrap();
    graph.add_edge(b, c).unwrap();
    graph.add_edge(c, d).unwrap();
    graph.add_edge(a, c).unwrap();
    assert_eq!(degree_target(&graph).unwrap(), 1.0);

    let report = cap_degrees(&mut graph, 1.0).unwrap();
    // a drops its whole tier 0 (b, c); b is then within bounds; c drops b and d
    assert_eq!(report.capped_nodes, 2);
    assert_eq!(report.removed.same, 4);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(report.residual_violations, 0);
    assert!(graph.node_by_label(&NodeLabel::from("d")).is_some());
    assert_eq!(graph.degree(d), 0);
}

#[test]
fn empty_graph_has_no_degree_target() {
    let graph = CollabGraph::new();
    let err = degree_target(&graph).unwrap_err();
    assert_eq!(err.info().context.get("operation"), Some(&"degree-target".to_string()));
}
