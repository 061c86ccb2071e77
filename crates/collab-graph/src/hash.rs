use sha2::{Digest, Sha256};

use crate::graph::CollabGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// The digest covers the sorted node labels and the sorted set of edges
/// expressed as label pairs, so it is independent of insertion order and of
/// adjacency order. Attributes are not part of the hash.
pub fn canonical_hash(graph: &CollabGraph) -> String {
    let mut hasher = Sha256::new();

    let mut labels: Vec<String> = graph.nodes().map(|n| graph.label(n).to_string()).collect();
    labels.sort();
    hasher.update((labels.len() as u64).to_le_bytes());
    for label in &labels {
        update_str(label, &mut hasher);
    }

    let mut edges: Vec<(String, String)> = graph
        .edges()
        .into_iter()
        .map(|(a, b)| {
            let (a, b) = (graph.label(a).to_string(), graph.label(b).to_string());
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
        .collect();
    edges.sort();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (a, b) in &edges {
        update_str(a, &mut hasher);
        update_str(b, &mut hasher);
    }

    format!("{:x}", hasher.finalize())
}

fn update_str(value: &str, hasher: &mut Sha256) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
