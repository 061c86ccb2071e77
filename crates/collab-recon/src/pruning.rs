use collab_core::errors::CollabError;
use collab_core::NodeLabel;
use collab_graph::{find_bridges, node_component, CollabGraph};
use serde::{Deserialize, Serialize};

use crate::diversity::heterogeneity;

/// Weighting applied to the two sub-component scores after a tentative cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReweightRule {
    /// Both terms weighted by `|C_u| / |C|`, so the `C_v` half borrows the `C_u` share.
    #[default]
    Literal,
    /// Each term weighted by its own share, `|C_u| / |C|` and `|C_v| / |C|`.
    SizeWeighted,
}

impl ReweightRule {
    fn combine(self, whole: usize, side_u: (usize, f64), side_v: (usize, f64)) -> f64 {
        let whole = whole as f64;
        let share_u = side_u.0 as f64 / whole;
        let share_v = match self {
            ReweightRule::Literal => share_u,
            ReweightRule::SizeWeighted => side_v.0 as f64 / whole,
        };
        share_u * side_u.1 + share_v * side_v.1
    }
}

/// Outcome of evaluating one bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeDecision {
    /// Endpoint whose component is scored before the cut.
    pub u: NodeLabel,
    /// Opposite endpoint.
    pub v: NodeLabel,
    /// Size of the component containing the bridge before the cut.
    pub component_size: usize,
    /// Sizes of the components of `u` and `v` after the cut.
    pub split_sizes: (usize, usize),
    /// Diversity of the whole component before the cut.
    pub diversity_before: f64,
    /// Reweighted diversity of the two halves after the cut.
    pub diversity_after: f64,
    /// Whether the cut was kept.
    pub removed: bool,
}

/// Summary of a bridge pruning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PruneReport {
    /// Reweighting rule in effect.
    pub rule: ReweightRule,
    /// Number of bridges in the snapshot.
    pub candidates: usize,
    /// Bridges permanently removed.
    pub removed: usize,
    /// Bridges restored after evaluation.
    pub restored: usize,
    /// Per-bridge decisions in evaluation order.
    pub decisions: Vec<BridgeDecision>,
}

/// Removes bridges whose removal does not lower the weighted diversity.
///
/// The bridge list is snapshotted once, before any mutation, in edge
/// enumeration order. Component membership is recomputed for every decision,
/// so earlier cuts shrink the component seen by later bridges. A restored
/// edge is appended to the end of both adjacency lists.
///
/// Only structural misuse of the graph can produce an error.
pub fn prune_bridges(
    graph: &mut CollabGraph,
    rule: ReweightRule,
) -> Result<PruneReport, CollabError> {
    let snapshot = find_bridges(graph);
    let mut report = PruneReport {
        rule,
        candidates: snapshot.len(),
        removed: 0,
        restored: 0,
        decisions: Vec::with_capacity(snapshot.len()),
    };

    for (u, v) in snapshot {
        let component = node_component(graph, u);
        let diversity_before = heterogeneity(graph, &component);

        graph.remove_edge(u, v)?;
        let side_u = node_component(graph, u);
        let side_v = node_component(graph, v);
        let diversity_after = rule.combine(
            component.len(),
            (side_u.len(), heterogeneity(graph, &side_u)),
            (side_v.len(), heterogeneity(graph, &side_v)),
        );

        let removed = diversity_before <= diversity_after;
        if removed {
            report.removed += 1;
        } else {
            graph.add_edge(u, v)?;
            report.restored += 1;
        }
        tracing::debug!(
            u = %graph.label(u),
            v = %graph.label(v),
            component = component.len(),
            diversity_before,
            diversity_after,
            removed,
            "bridge evaluated"
        );
        report.decisions.push(BridgeDecision {
            u: graph.label(u).clone(),
            v: graph.label(v).clone(),
            component_size: component.len(),
            split_sizes: (side_u.len(), side_v.len()),
            diversity_before,
            diversity_after,
            removed,
        });
    }

    tracing::info!(
        candidates = report.candidates,
        removed = report.removed,
        restored = report.restored,
        ?rule,
        "bridge pruning finished"
    );
    Ok(report)
}
