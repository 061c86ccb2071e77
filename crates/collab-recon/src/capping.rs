use std::cmp::Reverse;

use collab_core::errors::CollabError;
use collab_core::{NodeId, NodeLabel};
use collab_graph::CollabGraph;
use serde::{Deserialize, Serialize};

/// Removal priority class of a neighbour relative to the node being capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Same country, institute and expertise.
    Same,
    /// Differs in exactly one attribute.
    OneDifference,
    /// Differs in two or three attributes.
    MultiDifference,
    /// Unclassifiable because an endpoint has no attributes.
    Fallback,
}

/// Edge removed while capping a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapRemoval {
    /// Node whose degree was being reduced.
    pub node: NodeLabel,
    /// Neighbour whose edge was dropped.
    pub neighbour: NodeLabel,
    /// Tier the neighbour belonged to.
    pub tier: Tier,
}

/// Removed-edge counts per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    /// Tier 0 removals.
    pub same: usize,
    /// Tier 1 removals.
    pub one_difference: usize,
    /// Tier 2 removals.
    pub multi_difference: usize,
    /// Fallback removals.
    pub fallback: usize,
}

impl TierCounts {
    fn bump(&mut self, tier: Tier) {
        match tier {
            Tier::Same => self.same += 1,
            Tier::OneDifference => self.one_difference += 1,
            Tier::MultiDifference => self.multi_difference += 1,
            Tier::Fallback => self.fallback += 1,
        }
    }

    /// Total removals across tiers.
    pub fn total(&self) -> usize {
        self.same + self.one_difference + self.multi_difference + self.fallback
    }
}

/// Summary of a degree capping pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapReport {
    /// Degree threshold used for the whole pass.
    pub kmax: f64,
    /// Nodes that started above the threshold when visited.
    pub capped_nodes: usize,
    /// Removals per tier.
    pub removed: TierCounts,
    /// Removals in the order they happened.
    pub removals: Vec<CapRemoval>,
    /// Nodes still above the threshold once the pass ends.
    pub residual_violations: usize,
}

/// Average-degree target `|E| / |V|` used as the capping threshold.
pub fn degree_target(graph: &CollabGraph) -> Result<f64, CollabError> {
    graph
        .average_degree()
        .map_err(|_| CollabError::empty_graph("degree-target"))
}

/// Classifies `neighbour` relative to `node` by attribute disagreement.
pub fn tier_of(graph: &CollabGraph, node: NodeId, neighbour: NodeId) -> Tier {
    match (graph.attributes(node), graph.attributes(neighbour)) {
        (Some(own), Some(other)) => match own.difference(other) {
            0 => Tier::Same,
            1 => Tier::OneDifference,
            _ => Tier::MultiDifference,
        },
        _ => Tier::Fallback,
    }
}

/// Reduces node degrees toward `kmax` in one pass over the nodes.
///
/// Nodes are visited in insertion order and never revisited. For a node above
/// `kmax`, tier 0, tier 1 and tier 2 neighbours are dropped a whole tier at a
/// time, checking the degree after each tier. Remaining fallback neighbours
/// are then dropped one at a time, highest current degree first (ties keep
/// adjacency order), until the degree is at most `kmax`. A later node's
/// removals can push an earlier node back above or below the threshold; the
/// residual count in the report makes that visible.
pub fn cap_degrees(graph: &mut CollabGraph, kmax: f64) -> Result<CapReport, CollabError> {
    let mut report = CapReport {
        kmax,
        capped_nodes: 0,
        removed: TierCounts::default(),
        removals: Vec::new(),
        residual_violations: 0,
    };
    let order: Vec<NodeId> = graph.nodes().collect();

    'nodes: for node in order {
        if graph.degree(node) as f64 <= kmax {
            continue;
        }
        report.capped_nodes += 1;

        let neighbours = graph.neighbors(node).to_vec();
        let mut tiers: [Vec<NodeId>; 3] = Default::default();
        let mut fallback = Vec::new();
        for neighbour in neighbours {
            match tier_of(graph, node, neighbour) {
                Tier::Same => tiers[0].push(neighbour),
                Tier::OneDifference => tiers[1].push(neighbour),
                Tier::MultiDifference => tiers[2].push(neighbour),
                Tier::Fallback => fallback.push(neighbour),
            }
        }

        for (tier, members) in [Tier::Same, Tier::OneDifference, Tier::MultiDifference]
            .into_iter()
            .zip(tiers)
        {
            for neighbour in members {
                drop_edge(graph, &mut report, node, neighbour, tier)?;
            }
            if graph.degree(node) as f64 <= kmax {
                continue 'nodes;
            }
        }

        // Dropping (node, x) only changes the degree of x, so sorting the
        // remaining fallback neighbours once is the same as re-ranking after
        // every removal.
        fallback.sort_by_key(|neighbour| Reverse(graph.degree(*neighbour)));
        for neighbour in fallback {
            if graph.degree(node) as f64 <= kmax {
                break;
            }
            drop_edge(graph, &mut report, node, neighbour, Tier::Fallback)?;
        }
    }

    report.residual_violations = graph
        .nodes()
        .filter(|node| graph.degree(*node) as f64 > kmax)
        .count();
    tracing::info!(
        kmax,
        capped = report.capped_nodes,
        removed = report.removed.total(),
        residual = report.residual_violations,
        "degree capping finished"
    );
    Ok(report)
}

fn drop_edge(
    graph: &mut CollabGraph,
    report: &mut CapReport,
    node: NodeId,
    neighbour: NodeId,
    tier: Tier,
) -> Result<(), CollabError> {
    if !graph.remove_edge(node, neighbour)? {
        return Ok(());
    }
    tracing::trace!(node = %graph.label(node), neighbour = %graph.label(neighbour), ?tier, "edge capped");
    report.removed.bump(tier);
    report.removals.push(CapRemoval {
        node: graph.label(node).clone(),
        neighbour: graph.label(neighbour).clone(),
        tier,
    });
    Ok(())
}
