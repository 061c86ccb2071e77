use std::fmt::{self, Display};
use std::time::Instant;

use collab_core::errors::CollabError;
use collab_core::{NodeId, NodeLabel};
use collab_graph::{largest_component, CollabGraph};
use serde::{Deserialize, Serialize};

use crate::centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
};
use crate::paths::component_paths;

/// How the reported "node with highest centrality" is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CentralitySelection {
    /// Largest node identifier among the scored nodes, ignoring the scores.
    #[default]
    MaxKey,
    /// Node with the highest score; ties go to the earliest node.
    ArgMax,
}

impl CentralitySelection {
    fn pick(self, graph: &CollabGraph, scores: &[f64]) -> Option<NodeLabel> {
        match self {
            CentralitySelection::MaxKey => graph.nodes().map(|node| graph.label(node)).max().cloned(),
            CentralitySelection::ArgMax => {
                let mut best: Option<(NodeId, f64)> = None;
                for (node, &score) in graph.nodes().zip(scores) {
                    if best.map_or(true, |(_, top)| score > top) {
                        best = Some((node, score));
                    }
                }
                best.map(|(node, _)| graph.label(node).clone())
            }
        }
    }

    fn row_suffix(self) -> &'static str {
        match self {
            CentralitySelection::MaxKey => " (max key)",
            CentralitySelection::ArgMax => "",
        }
    }
}

/// Aggregate description of one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStatistics {
    /// Nodes with degree zero.
    pub isolates: usize,
    /// Node count.
    pub nodes: usize,
    /// Edge count.
    pub edges: usize,
    /// `|E| / |V|`.
    pub average_degree: f64,
    /// Largest degree.
    pub highest_degree: usize,
    /// Mean local clustering coefficient over all nodes.
    pub average_clustering: f64,
    /// Node count of the largest connected component.
    pub lcc_nodes: usize,
    /// Diameter of the largest connected component.
    pub lcc_diameter: usize,
    /// Average shortest path length inside the largest connected component.
    pub lcc_average_shortest_path: f64,
    /// Selection rule used for the centrality rows.
    pub selection: CentralitySelection,
    /// Selected node for degree centrality.
    pub degree_centrality_node: NodeLabel,
    /// Selected node for eigenvector centrality.
    pub eigenvector_centrality_node: NodeLabel,
    /// Selected node for betweenness centrality.
    pub betweenness_centrality_node: NodeLabel,
    /// Selected node for closeness centrality.
    pub closeness_centrality_node: NodeLabel,
}

/// Value cell of the property table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Integer-valued property.
    Count(usize),
    /// Real-valued property.
    Real(f64),
    /// Node-valued property.
    Node(NodeLabel),
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Count(value) => write!(f, "{value}"),
            PropertyValue::Real(value) => write!(f, "{value}"),
            PropertyValue::Node(label) => write!(f, "{label}"),
        }
    }
}

/// One row of the property table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRow {
    /// Property name.
    pub property: String,
    /// Property value.
    pub result: PropertyValue,
}

impl PropertyRow {
    fn new(property: impl Into<String>, result: PropertyValue) -> Self {
        Self {
            property: property.into(),
            result,
        }
    }
}

impl NetworkStatistics {
    /// Ordered property table in the presentation order.
    pub fn table(&self) -> Vec<PropertyRow> {
        use PropertyValue::{Count, Node, Real};
        let suffix = self.selection.row_suffix();
        vec![
            PropertyRow::new("Number of isolates", Count(self.isolates)),
            PropertyRow::new("Number of nodes", Count(self.nodes)),
            PropertyRow::new("Number of edges", Count(self.edges)),
            PropertyRow::new("Average degree", Real(self.average_degree)),
            PropertyRow::new("Highest degree", Count(self.highest_degree)),
            PropertyRow::new("Average Clustering Coefficient", Real(self.average_clustering)),
            PropertyRow::new(
                "Number of nodes in largest connected component",
                Count(self.lcc_nodes),
            ),
            PropertyRow::new(
                "Diameter of largest connected component",
                Count(self.lcc_diameter),
            ),
            PropertyRow::new(
                "Average shortest path of largest connected component",
                Real(self.lcc_average_shortest_path),
            ),
            PropertyRow::new(
                format!("Node with highest degree centrality{suffix}"),
                Node(self.degree_centrality_node.clone()),
            ),
            PropertyRow::new(
                format!("Node with highest eigenvector centrality{suffix}"),
                Node(self.eigenvector_centrality_node.clone()),
            ),
            PropertyRow::new(
                format!("Node with highest betweenness centrality{suffix}"),
                Node(self.betweenness_centrality_node.clone()),
            ),
            PropertyRow::new(
                format!("Node with highest closeness centrality{suffix}"),
                Node(self.closeness_centrality_node.clone()),
            ),
        ]
    }
}

/// Mean local clustering coefficient, counting nodes of degree below two as `0`.
pub fn average_clustering(graph: &CollabGraph) -> Result<f64, CollabError> {
    let n = graph.node_count();
    if n == 0 {
        return Err(CollabError::empty_graph("average-clustering"));
    }
    let mut marked = vec![false; n];
    let mut sum = 0.0;
    for node in graph.nodes() {
        let neighbours = graph.neighbors(node);
        let degree = neighbours.len();
        if degree < 2 {
            continue;
        }
        for neighbour in neighbours {
            marked[neighbour.index()] = true;
        }
        let mut links = 0usize;
        for neighbour in neighbours {
            links += graph
                .neighbors(*neighbour)
                .iter()
                .filter(|other| marked[other.index()])
                .count();
        }
        for neighbour in neighbours {
            marked[neighbour.index()] = false;
        }
        // every triangle edge was seen from both ends
        sum += links as f64 / (degree * (degree - 1)) as f64;
    }
    Ok(sum / n as f64)
}

/// Computes the full statistics record for `graph`.
pub fn compute_statistics(
    graph: &CollabGraph,
    selection: CentralitySelection,
) -> Result<NetworkStatistics, CollabError> {
    let started = Instant::now();
    let average_degree = graph
        .average_degree()
        .map_err(|_| CollabError::empty_graph("statistics"))?;
    let degrees = graph.degrees();
    let isolates = degrees.iter().filter(|d| **d == 0).count();
    let highest_degree = graph.max_degree().unwrap_or(0);
    let average_clustering = average_clustering(graph)?;

    let lcc = largest_component(graph).ok_or_else(|| CollabError::empty_graph("statistics"))?;
    let paths = component_paths(graph, &lcc)?;
    tracing::debug!(
        lcc = paths.nodes,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "structural statistics computed"
    );

    let centrality_started = Instant::now();
    let degree = degree_centrality(graph);
    let eigenvector = eigenvector_centrality(graph)?;
    let betweenness = betweenness_centrality(graph);
    let closeness = closeness_centrality(graph);
    tracing::debug!(
        elapsed_ms = centrality_started.elapsed().as_millis() as u64,
        "centrality computed"
    );

    let pick = |scores: &[f64]| {
        selection
            .pick(graph, scores)
            .ok_or_else(|| CollabError::empty_graph("centrality"))
    };
    let stats = NetworkStatistics {
        isolates,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        average_degree,
        highest_degree,
        average_clustering,
        lcc_nodes: paths.nodes,
        lcc_diameter: paths.diameter,
        lcc_average_shortest_path: paths.average_shortest_path,
        selection,
        degree_centrality_node: pick(&degree)?,
        eigenvector_centrality_node: pick(&eigenvector)?,
        betweenness_centrality_node: pick(&betweenness)?,
        closeness_centrality_node: pick(&closeness)?,
    };
    tracing::info!(
        nodes = stats.nodes,
        edges = stats.edges,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "statistics computed"
    );
    Ok(stats)
}
