use std::collections::VecDeque;

use collab_core::errors::{CollabError, ErrorInfo};
use collab_core::NodeId;
use collab_graph::CollabGraph;
use serde::{Deserialize, Serialize};

/// Shortest-path metrics of one connected component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    /// Number of nodes in the component.
    pub nodes: usize,
    /// Largest eccentricity.
    pub diameter: usize,
    /// Mean distance over ordered pairs of distinct nodes.
    pub average_shortest_path: f64,
}

/// Computes diameter and average shortest path of a connected component.
///
/// `component` must be a full connected component of `graph`; a BFS from
/// each member then stays inside it. A single-node component has no pairs
/// and is rejected.
pub fn component_paths(
    graph: &CollabGraph,
    component: &[NodeId],
) -> Result<PathSummary, CollabError> {
    let n = component.len();
    if n < 2 {
        return Err(CollabError::DegenerateComponent(
            ErrorInfo::new(
                "degenerate-component",
                "path metrics need a component with at least two nodes",
            )
            .with_context("nodes", n)
            .with_hint("the graph has no edges"),
        ));
    }

    let mut dist = vec![usize::MAX; graph.node_count()];
    let mut queue = VecDeque::new();
    let mut diameter = 0;
    let mut total: u64 = 0;
    for &source in component {
        for &member in component {
            dist[member.index()] = usize::MAX;
        }
        dist[source.index()] = 0;
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            let next = dist[v.index()] + 1;
            for w in graph.neighbors(v) {
                if dist[w.index()] == usize::MAX {
                    dist[w.index()] = next;
                    diameter = diameter.max(next);
                    total += next as u64;
                    queue.push_back(*w);
                }
            }
        }
    }

    Ok(PathSummary {
        nodes: n,
        diameter,
        average_shortest_path: total as f64 / (n as f64 * (n as f64 - 1.0)),
    })
}
