//! Error taxonomy for graph building, reconstruction and statistics.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and context carried by every [`CollabError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code that callers and tests match on.
    pub code: String,
    /// Diagnostic text.
    pub message: String,
    /// Offending values keyed by name, e.g. `path`, `row`, `operation`.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested fix, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload without context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `key = value`, replacing an earlier value for `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for graph construction, reconstruction and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CollabError {
    /// Diversity was requested for a node set without members.
    #[error("empty node set: {0}")]
    EmptyNodeSet(ErrorInfo),
    /// A graph-wide ratio was requested for a graph without nodes.
    #[error("empty graph: {0}")]
    EmptyGraph(ErrorInfo),
    /// The largest connected component is a single node.
    #[error("degenerate component: {0}")]
    DegenerateComponent(ErrorInfo),
    /// An iterative computation exhausted its iteration budget.
    #[error("convergence error: {0}")]
    Convergence(ErrorInfo),
    /// Structural misuse of the graph store.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Collaboration records or attribute tables could not be loaded.
    #[error("dataset error: {0}")]
    Dataset(ErrorInfo),
    /// Invalid configuration values.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CollabError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CollabError::EmptyNodeSet(info)
            | CollabError::EmptyGraph(info)
            | CollabError::DegenerateComponent(info)
            | CollabError::Convergence(info)
            | CollabError::Graph(info)
            | CollabError::Dataset(info)
            | CollabError::Config(info)
            | CollabError::Serde(info) => info,
        }
    }

    /// Shorthand for the empty-graph family used by every ratio over `|V|`.
    pub fn empty_graph(operation: &str) -> Self {
        CollabError::EmptyGraph(
            ErrorInfo::new("empty-graph", "operation requires at least one node")
                .with_context("operation", operation),
        )
    }
}
