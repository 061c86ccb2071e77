use std::collections::BTreeSet;

use collab_core::errors::{CollabError, ErrorInfo};
use collab_core::NodeId;
use collab_graph::CollabGraph;

/// Multiplicative heterogeneity index of a node set.
///
/// `(distinct countries / n) * (distinct institutes / n) * (distinct expertise / n)`.
/// Nodes without attributes share a single "missing" value per attribute. The
/// score lies in `[0, 1]` and is exactly `1` for a singleton.
pub fn diversity(graph: &CollabGraph, nodes: &[NodeId]) -> Result<f64, CollabError> {
    if nodes.is_empty() {
        return Err(CollabError::EmptyNodeSet(
            ErrorInfo::new("empty-node-set", "diversity requires at least one node")
                .with_context("nodes", 0),
        ));
    }
    Ok(heterogeneity(graph, nodes))
}

/// Unchecked variant for callers that already hold a nonempty component.
pub(crate) fn heterogeneity(graph: &CollabGraph, nodes: &[NodeId]) -> f64 {
    let mut countries = BTreeSet::new();
    let mut institutes = BTreeSet::new();
    let mut expertise = BTreeSet::new();
    for &node in nodes {
        let attrs = graph.attributes(node);
        countries.insert(attrs.map(|a| a.country.as_str()));
        institutes.insert(attrs.map(|a| a.institute.as_str()));
        expertise.insert(attrs.map(|a| a.expertise.as_str()));
    }
    let n = nodes.len() as f64;
    (countries.len() as f64 / n) * (institutes.len() as f64 / n) * (expertise.len() as f64 / n)
}
