use std::collections::VecDeque;

use collab_core::NodeId;

use crate::graph::CollabGraph;
use crate::ids::node_index;

/// Returns the connected component containing `node` in BFS order.
///
/// Membership reflects the graph at call time; results must not be reused
/// after the graph is mutated.
pub fn node_component(graph: &CollabGraph, node: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; graph.node_count()];
    bfs_from(graph, node, &mut visited)
}

/// Enumerates all connected components.
///
/// Components are discovered by scanning nodes in insertion order and
/// flooding from each unvisited node.
pub fn connected_components(graph: &CollabGraph) -> Vec<Vec<NodeId>> {
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();
    for node in graph.nodes() {
        if visited[node_index(node)] {
            continue;
        }
        components.push(bfs_from(graph, node, &mut visited));
    }
    components
}

/// Number of connected components.
pub fn component_count(graph: &CollabGraph) -> usize {
    connected_components(graph).len()
}

/// Returns the largest connected component, `None` for an empty graph.
///
/// Among equally large components the one enumerated last wins, which is the
/// element an ascending stable sort by size would place at the end.
pub fn largest_component(graph: &CollabGraph) -> Option<Vec<NodeId>> {
    let mut best: Option<Vec<NodeId>> = None;
    for component in connected_components(graph) {
        match &best {
            Some(current) if component.len() < current.len() => {}
            _ => best = Some(component),
        }
    }
    best
}

fn bfs_from(graph: &CollabGraph, start: NodeId, visited: &mut [bool]) -> Vec<NodeId> {
    let mut order = vec![start];
    visited[node_index(start)] = true;
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors(current) {
            if !visited[node_index(next)] {
                visited[node_index(next)] = true;
                order.push(next);
                queue.push_back(next);
            }
        }
    }
    order
}
