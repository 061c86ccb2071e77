use collab_core::NodeId;
use collab_graph::CollabGraph;
use collab_stats::{
    betweenness_centrality, closeness_centrality, compute_degree_distribution, fit_trend,
};
use proptest::prelude::*;

fn graph_from_pairs(n: usize, pairs: &[(usize, usize)]) -> CollabGraph {
    let mut graph = CollabGraph::new();
    let nodes: Vec<NodeId> = (0..n).map(|i| graph.add_node(i as u64)).collect();
    for &(a, b) in pairs {
        let (a, b) = (a % n, b % n);
        if a != b {
            graph.add_edge(nodes[a], nodes[b]).unwrap();
        }
    }
    graph
}

#[test]
fn star_distribution_descends_by_degree() {
    let graph = graph_from_pairs(11, &(1..11).map(|leaf| (0, leaf)).collect::<Vec<_>>());
    let points = compute_degree_distribution(&graph);
    assert_eq!(points.len(), 2);
    assert_eq!((points[0].degree, points[0].count), (10, 1));
    assert_eq!((points[1].degree, points[1].count), (1, 10));
    assert_eq!(points[0].log_degree, 1.0);
    assert_eq!(points[0].log_count, 0.0);
    assert_eq!(points[1].log_degree, 0.0);
    assert_eq!(points[1].log_count, 1.0);

    let fit = fit_trend(&points).unwrap();
    assert!((fit.slope + 1.0).abs() < 1e-12);
    assert!((fit.intercept - 1.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn distribution_accounts_for_every_node(
        n in 1usize..20,
        pairs in prop::collection::vec((0usize..20, 0usize..20), 0..60),
    ) {
        let graph = graph_from_pairs(n, &pairs);
        let points = compute_degree_distribution(&graph);
        let total: f64 = points.iter().map(|p| 10f64.powf(p.log_count)).sum();
        prop_assert!((total - n as f64).abs() < 1e-6);
        prop_assert_eq!(points.iter().map(|p| p.count).sum::<usize>(), n);
        for pair in points.windows(2) {
            prop_assert!(pair[0].degree > pair[1].degree);
        }
    }

    #[test]
    fn normalised_scores_stay_bounded(
        n in 3usize..16,
        pairs in prop::collection::vec((0usize..16, 0usize..16), 0..40),
    ) {
        let graph = graph_from_pairs(n, &pairs);
        for score in betweenness_centrality(&graph) {
            prop_assert!((0.0..=1.0 + 1e-9).contains(&score));
        }
        for score in closeness_centrality(&graph) {
            prop_assert!((0.0..=1.0 + 1e-9).contains(&score));
        }
    }
}
