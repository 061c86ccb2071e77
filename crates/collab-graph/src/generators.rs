use collab_core::errors::{CollabError, ErrorInfo};
use collab_core::rng::RngHandle;
use rand::Rng;

use crate::graph::CollabGraph;
use crate::ids::make_node;

/// Generates an Erdős–Rényi `G(n, p)` graph with deterministic randomness.
///
/// Nodes are labelled `0..n` and inserted in order. For `0 < p < 1` the
/// generator skips over absent edges geometrically (Batagelj–Brandes), which
/// costs `O(n + m)` draws instead of one draw per node pair.
pub fn gen_gnp(
    n_nodes: usize,
    edge_probability: f64,
    rng: &mut RngHandle,
) -> Result<CollabGraph, CollabError> {
    if n_nodes == 0 {
        return Err(CollabError::Config(ErrorInfo::new(
            "empty-graph",
            "random generator requires at least one node",
        )));
    }
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(CollabError::Config(
            ErrorInfo::new("invalid-probability", "edge probability must lie in [0, 1]")
                .with_context("edge_probability", edge_probability),
        ));
    }

    let mut graph = CollabGraph::with_capacity(n_nodes);
    for index in 0..n_nodes {
        graph.add_node(index as u64);
    }

    if edge_probability <= 0.0 {
        return Ok(graph);
    }
    if edge_probability >= 1.0 {
        for v in 1..n_nodes {
            for w in 0..v {
                graph.add_edge(make_node(v), make_node(w))?;
            }
        }
        return Ok(graph);
    }

    let log_q = (1.0 - edge_probability).ln();
    let mut v = 1usize;
    let mut w: i64 = -1;
    while v < n_nodes {
        let draw: f64 = rng.gen();
        let log_r = (1.0 - draw).ln();
        w += 1 + (log_r / log_q).floor() as i64;
        while w >= v as i64 && v < n_nodes {
            w -= v as i64;
            v += 1;
        }
        if v < n_nodes {
            graph.add_edge(make_node(v), make_node(w as usize))?;
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        edge_probability,
        "generated gnp graph"
    );
    Ok(graph)
}
