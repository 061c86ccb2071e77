use collab_core::errors::CollabError;
use collab_graph::CollabGraph;
use serde::{Deserialize, Serialize};

use crate::capping::{cap_degrees, degree_target, CapReport};
use crate::pruning::{prune_bridges, PruneReport, ReweightRule};

/// Knobs for a reconstruction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionOptions {
    /// Weighting used when scoring a tentative bridge cut.
    #[serde(default)]
    pub reweight: ReweightRule,
}

/// Structured report emitted by [`reconstruct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructionReport {
    /// Options the pass ran with.
    pub options: ReconstructionOptions,
    /// Node count (unchanged by reconstruction).
    pub nodes: usize,
    /// Edge count of the input graph.
    pub edges_before: usize,
    /// Edge count after bridge pruning.
    pub edges_after_pruning: usize,
    /// Edge count of the reconstructed graph.
    pub edges_after: usize,
    /// Bridge pruning summary.
    pub pruning: PruneReport,
    /// Degree capping summary; `None` when the graph has no nodes.
    pub capping: Option<CapReport>,
}

/// Runs bridge pruning followed by degree capping on `graph` in place.
///
/// `kmax` is taken from the pruned graph and held fixed for the capping pass.
pub fn reconstruct(
    graph: &mut CollabGraph,
    options: &ReconstructionOptions,
) -> Result<ReconstructionReport, CollabError> {
    let edges_before = graph.edge_count();
    let pruning = prune_bridges(graph, options.reweight)?;
    let edges_after_pruning = graph.edge_count();

    let capping = match degree_target(graph) {
        Ok(kmax) => Some(cap_degrees(graph, kmax)?),
        Err(CollabError::EmptyGraph(_)) => {
            tracing::warn!("graph has no nodes; skipping degree capping");
            None
        }
        Err(err) => return Err(err),
    };

    let report = ReconstructionReport {
        options: *options,
        nodes: graph.node_count(),
        edges_before,
        edges_after_pruning,
        edges_after: graph.edge_count(),
        pruning,
        capping,
    };
    tracing::info!(
        nodes = report.nodes,
        edges_before = report.edges_before,
        edges_after = report.edges_after,
        "reconstruction finished"
    );
    Ok(report)
}
