use std::collections::BTreeSet;

use collab_core::NodeId;

use crate::graph::CollabGraph;
use crate::ids::{canonical_pair, node_index};

const UNVISITED: usize = usize::MAX;

struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    cursor: usize,
}

/// Returns every bridge of the graph in edge enumeration order.
///
/// Bridges are found with an iterative low-link DFS in `O(|V| + |E|)` and
/// then reported in the order [`CollabGraph::edges`] yields them, each pair
/// oriented the same way as in that enumeration.
pub fn find_bridges(graph: &CollabGraph) -> Vec<(NodeId, NodeId)> {
    let cut = bridge_set(graph);
    if cut.is_empty() {
        return Vec::new();
    }
    graph
        .edges()
        .into_iter()
        .filter(|(a, b)| cut.contains(&canonical_pair(*a, *b)))
        .collect()
}

fn bridge_set(graph: &CollabGraph) -> BTreeSet<(NodeId, NodeId)> {
    let n = graph.node_count();
    let mut discovery = vec![UNVISITED; n];
    let mut low = vec![0usize; n];
    let mut timer = 0usize;
    let mut bridges = BTreeSet::new();

    for root in graph.nodes() {
        if discovery[node_index(root)] != UNVISITED {
            continue;
        }
        discovery[node_index(root)] = timer;
        low[node_index(root)] = timer;
        timer += 1;
        let mut stack = vec![Frame {
            node: root,
            parent: None,
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let parent = frame.parent;
            let neighbours = graph.neighbors(node);
            if frame.cursor < neighbours.len() {
                let next = neighbours[frame.cursor];
                frame.cursor += 1;
                // simple graph: the tree edge back to the parent is the only
                // edge to skip
                if Some(next) == parent {
                    continue;
                }
                if discovery[node_index(next)] == UNVISITED {
                    discovery[node_index(next)] = timer;
                    low[node_index(next)] = timer;
                    timer += 1;
                    stack.push(Frame {
                        node: next,
                        parent: Some(node),
                        cursor: 0,
                    });
                } else {
                    low[node_index(node)] = low[node_index(node)].min(discovery[node_index(next)]);
                }
            } else {
                stack.pop();
                if let Some(parent) = parent {
                    low[node_index(parent)] = low[node_index(parent)].min(low[node_index(node)]);
                    if low[node_index(node)] > discovery[node_index(parent)] {
                        bridges.insert(canonical_pair(parent, node));
                    }
                }
            }
        }
    }
    bridges
}
