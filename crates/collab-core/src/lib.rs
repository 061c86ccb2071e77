#![deny(missing_docs)]
#![doc = "Core identifiers, attribute records, error taxonomy and seeding policy shared by the collaboration network crates."]

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

mod attributes;
pub mod errors;
pub mod rng;

pub use attributes::{AttributeTable, NodeAttributes};
pub use errors::{CollabError, ErrorInfo};
pub use rng::{derive_substream_seed, RngHandle};

/// Dense index of a node inside one graph instance.
///
/// Indices are assigned in insertion order and stay valid for the lifetime of
/// the graph; nodes are never removed, only edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u32 {
        self.0
    }

    /// Returns the identifier as an index into per-node arrays.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// External, user-visible identifier of a node.
///
/// Generated graphs label nodes with integers, dataset graphs with author
/// identifiers. Ordering is numeric for [`NodeLabel::Index`] and lexicographic
/// for [`NodeLabel::Author`]; a single graph never mixes the two.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeLabel {
    /// Integer label assigned by a generator.
    Index(u64),
    /// Author identifier taken from the collaboration records.
    Author(String),
}

impl Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Index(value) => write!(f, "{value}"),
            NodeLabel::Author(value) => f.write_str(value),
        }
    }
}

impl From<&str> for NodeLabel {
    fn from(value: &str) -> Self {
        NodeLabel::Author(value.to_owned())
    }
}

impl From<String> for NodeLabel {
    fn from(value: String) -> Self {
        NodeLabel::Author(value)
    }
}

impl From<u64> for NodeLabel {
    fn from(value: u64) -> Self {
        NodeLabel::Index(value)
    }
}
