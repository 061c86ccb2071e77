#![deny(missing_docs)]

//! Attributed undirected graph store for collaboration networks.
//!
//! The store keeps nodes as dense indices into per-node arrays (labels,
//! attributes, adjacency lists) so reconstruction passes can mutate edges in
//! place without reference cycles. Component and bridge queries always read
//! the current edge set; nothing is cached across mutations.

mod bridges;
mod components;
mod generators;
mod graph;
mod hash;
mod ids;

pub use bridges::find_bridges;
pub use components::{component_count, connected_components, largest_component, node_component};
pub use generators::gen_gnp;
pub use graph::CollabGraph;
pub use hash::canonical_hash;
