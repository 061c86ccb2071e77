#![deny(missing_docs)]

//! Network statistics over collaboration graphs.
//!
//! Everything here is read-only over a [`collab_graph::CollabGraph`]:
//! aggregate properties and centrality selection ([`compute_statistics`]),
//! largest-component path metrics, and the log-log degree distribution with
//! an optional least-squares trend.

pub mod centrality;
mod distribution;
mod paths;
mod statistics;
mod trend;

pub use centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
};
pub use distribution::{compute_degree_distribution, DegreePoint};
pub use paths::{component_paths, PathSummary};
pub use statistics::{
    average_clustering, compute_statistics, CentralitySelection, NetworkStatistics, PropertyRow,
    PropertyValue,
};
pub use trend::{fit_trend, TrendFit};
