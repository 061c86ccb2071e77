use std::collections::BTreeMap;

use collab_core::errors::{CollabError, ErrorInfo};
use collab_core::{NodeAttributes, NodeId, NodeLabel};

use crate::ids::{make_node, node_index};

/// Attributed, simple, undirected graph over dense node indices.
///
/// Nodes are appended and never removed; edges may be inserted and deleted in
/// place. Each adjacency list keeps insertion order, so re-inserting a deleted
/// edge appends it at the end of both endpoint lists.
#[derive(Debug, Clone, Default)]
pub struct CollabGraph {
    labels: Vec<NodeLabel>,
    lookup: BTreeMap<NodeLabel, NodeId>,
    attributes: Vec<Option<NodeAttributes>>,
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl CollabGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            labels: Vec::with_capacity(nodes),
            lookup: BTreeMap::new(),
            attributes: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Adds a node with the given label, returning the existing index if the
    /// label is already present.
    pub fn add_node(&mut self, label: impl Into<NodeLabel>) -> NodeId {
        let label = label.into();
        if let Some(id) = self.lookup.get(&label) {
            return *id;
        }
        let id = make_node(self.labels.len());
        self.lookup.insert(label.clone(), id);
        self.labels.push(label);
        self.attributes.push(None);
        self.adjacency.push(Vec::new());
        id
    }

    /// Inserts the undirected edge `{a, b}`.
    ///
    /// Returns `Ok(false)` when the edge already exists. Self-loops and
    /// unknown endpoints are rejected.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool, CollabError> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        if a == b {
            return Err(CollabError::Graph(
                graph_error("self-loop", "self-loops are not permitted")
                    .with_context("node", &self.labels[node_index(a)]),
            ));
        }
        if self.has_edge(a, b) {
            return Ok(false);
        }
        self.adjacency[node_index(a)].push(b);
        self.adjacency[node_index(b)].push(a);
        self.edge_count += 1;
        Ok(true)
    }

    /// Inserts an edge between two labels, adding missing nodes first.
    pub fn add_edge_by_label(
        &mut self,
        a: impl Into<NodeLabel>,
        b: impl Into<NodeLabel>,
    ) -> Result<bool, CollabError> {
        let a = self.add_node(a);
        let b = self.add_node(b);
        self.add_edge(a, b)
    }

    /// Deletes the undirected edge `{a, b}`. Returns `Ok(false)` when absent.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool, CollabError> {
        self.ensure_node(a)?;
        self.ensure_node(b)?;
        let Some(pos_a) = self.position(a, b) else {
            return Ok(false);
        };
        self.adjacency[node_index(a)].remove(pos_a);
        if let Some(pos_b) = self.position(b, a) {
            self.adjacency[node_index(b)].remove(pos_b);
        }
        self.edge_count -= 1;
        Ok(true)
    }

    /// Returns whether `{a, b}` is an edge.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.position(a, b).is_some()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over node indices in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(make_node)
    }

    /// Returns the label of a node.
    ///
    /// Panics if `node` does not belong to this graph.
    pub fn label(&self, node: NodeId) -> &NodeLabel {
        &self.labels[node_index(node)]
    }

    /// Resolves a label to its node index.
    pub fn node_by_label(&self, label: &NodeLabel) -> Option<NodeId> {
        self.lookup.get(label).copied()
    }

    /// Returns the attributes of a node, if any were attached.
    pub fn attributes(&self, node: NodeId) -> Option<&NodeAttributes> {
        self.attributes
            .get(node_index(node))
            .and_then(|attrs| attrs.as_ref())
    }

    /// Attaches attributes to a node, replacing previous ones.
    pub fn set_attributes(
        &mut self,
        node: NodeId,
        attributes: NodeAttributes,
    ) -> Result<(), CollabError> {
        self.ensure_node(node)?;
        self.attributes[node_index(node)] = Some(attributes);
        Ok(())
    }

    /// Neighbours of a node in adjacency order.
    ///
    /// Panics if `node` does not belong to this graph.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node_index(node)]
    }

    /// Degree of a node.
    ///
    /// Panics if `node` does not belong to this graph.
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node_index(node)].len()
    }

    /// Degrees of every node in insertion order.
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// Largest degree in the graph, `None` when empty.
    pub fn max_degree(&self) -> Option<usize> {
        self.adjacency.iter().map(Vec::len).max()
    }

    /// Average degree as `|E| / |V|`.
    pub fn average_degree(&self) -> Result<f64, CollabError> {
        if self.is_empty() {
            return Err(CollabError::empty_graph("average-degree"));
        }
        Ok(self.edge_count as f64 / self.node_count() as f64)
    }

    /// Edges in enumeration order.
    ///
    /// Nodes are visited in insertion order; for each node the neighbours are
    /// visited in adjacency order and `(node, neighbour)` is yielded unless
    /// the neighbour was visited as a node before.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut seen = vec![false; self.labels.len()];
        let mut edges = Vec::with_capacity(self.edge_count);
        for node in self.nodes() {
            for &neighbour in self.neighbors(node) {
                if !seen[node_index(neighbour)] {
                    edges.push((node, neighbour));
                }
            }
            seen[node_index(node)] = true;
        }
        edges
    }

    fn position(&self, from: NodeId, to: NodeId) -> Option<usize> {
        self.adjacency
            .get(node_index(from))?
            .iter()
            .position(|candidate| *candidate == to)
    }

    fn ensure_node(&self, node: NodeId) -> Result<(), CollabError> {
        if node_index(node) < self.labels.len() {
            Ok(())
        } else {
            Err(CollabError::Graph(
                graph_error("unknown-node", "node does not exist")
                    .with_context("node", node.as_raw()),
            ))
        }
    }
}

fn graph_error(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_edges_are_ignored() {
        let mut graph = CollabGraph::new();
        assert!(graph.add_edge_by_label("a", "b").unwrap());
        assert!(!graph.add_edge_by_label("b", "a").unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut graph = CollabGraph::new();
        let a = graph.add_node("a");
        let err = graph.add_edge(a, a).unwrap_err();
        assert!(matches!(err, CollabError::Graph(info) if info.code == "self-loop"));
    }

    #[test]
    fn unknown_nodes_are_rejected() {
        let mut graph = CollabGraph::new();
        let a = graph.add_node("a");
        let ghost = NodeId::from_raw(7);
        let err = graph.add_edge(a, ghost).unwrap_err();
        assert_eq!(err.info().code, "unknown-node");
    }

    #[test]
    fn reinserted_edges_move_to_the_back() {
        let mut graph = CollabGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, c).unwrap();
        assert!(graph.remove_edge(a, b).unwrap());
        assert!(!graph.remove_edge(a, b).unwrap());
        graph.add_edge(a, b).unwrap();
        assert_eq!(graph.neighbors(a), &[c, b]);
        assert_eq!(graph.edges(), vec![(a, c), (a, b)]);
    }

    #[test]
    fn average_degree_guards_empty_graph() {
        let graph = CollabGraph::new();
        assert!(matches!(
            graph.average_degree(),
            Err(CollabError::EmptyGraph(_))
        ));
    }
}
