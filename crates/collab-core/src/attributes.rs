use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Categorical profile attached to an author in reconstruction mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Country of the author's affiliation.
    pub country: String,
    /// Institute of the author's affiliation.
    pub institute: String,
    /// Research expertise label.
    pub expertise: String,
}

impl NodeAttributes {
    /// Creates an attribute record.
    pub fn new(
        country: impl Into<String>,
        institute: impl Into<String>,
        expertise: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            institute: institute.into(),
            expertise: expertise.into(),
        }
    }

    /// Number of attributes (0..=3) on which the two profiles disagree.
    pub fn difference(&self, other: &NodeAttributes) -> usize {
        usize::from(self.institute != other.institute)
            + usize::from(self.country != other.country)
            + usize::from(self.expertise != other.expertise)
    }
}

/// Read-only side table mapping author identifiers to their attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeTable {
    entries: BTreeMap<String, NodeAttributes>,
}

impl AttributeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the attributes of an author.
    pub fn insert(&mut self, author: impl Into<String>, attributes: NodeAttributes) {
        self.entries.insert(author.into(), attributes);
    }

    /// Looks up the attributes of an author.
    pub fn get(&self, author: &str) -> Option<&NodeAttributes> {
        self.entries.get(author)
    }

    /// Number of authors with attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, NodeAttributes)> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = (String, NodeAttributes)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
