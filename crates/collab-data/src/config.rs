use std::fs;
use std::path::{Path, PathBuf};

use collab_core::errors::{CollabError, ErrorInfo};
use collab_recon::ReconstructionOptions;
use serde::{Deserialize, Serialize};

fn config_error(code: &str, message: impl Into<String>) -> CollabError {
    CollabError::Config(ErrorInfo::new(code, message))
}

/// YAML-configurable parameters of a collaboration analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollabConfig {
    /// Input file locations.
    pub dataset: DatasetPaths,
    /// Year range used when the command line gives none.
    #[serde(default)]
    pub years: YearRange,
    /// Random baseline parameters.
    #[serde(default)]
    pub random: RandomGraphConfig,
    /// Reconstruction knobs.
    #[serde(default)]
    pub reconstruction: ReconstructionOptions,
}

impl CollabConfig {
    /// Reads and validates a YAML configuration file.
    ///
    /// Relative dataset paths are resolved against the directory holding the
    /// configuration file.
    pub fn load(path: &Path) -> Result<Self, CollabError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            CollabError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        let mut config = Self::from_yaml(&contents).map_err(|err| match err {
            CollabError::Config(info) => {
                CollabError::Config(info.with_context("path", path.display()))
            }
            other => other,
        })?;
        if let Some(base) = path.parent() {
            config.dataset.resolve_against(base);
        }
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self, CollabError> {
        let config: Self = serde_yaml::from_str(contents)
            .map_err(|err| config_error("config-parse", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), CollabError> {
        self.years.validate()?;
        self.random.validate()
    }
}

/// Locations of the input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPaths {
    /// CSV with `year`, `author_pid` and `coauthor_pid` columns.
    pub edges: PathBuf,
    /// JSON object mapping author ids to attributes.
    #[serde(default)]
    pub attributes: Option<PathBuf>,
}

impl DatasetPaths {
    fn resolve_against(&mut self, base: &Path) {
        if self.edges.is_relative() {
            self.edges = base.join(&self.edges);
        }
        if let Some(attributes) = self.attributes.as_mut() {
            if attributes.is_relative() {
                *attributes = base.join(&*attributes);
            }
        }
    }
}

/// Inclusive range of publication years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First year included.
    pub start: i32,
    /// Last year included.
    pub end: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: 1982,
            end: 2022,
        }
    }
}

impl YearRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self, CollabError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Returns whether `year` lies inside the range.
    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Rejects inverted ranges.
    pub fn validate(&self) -> Result<(), CollabError> {
        if self.start > self.end {
            return Err(CollabError::Config(
                ErrorInfo::new("inverted-year-range", "year range start exceeds its end")
                    .with_context("start", self.start)
                    .with_context("end", self.end),
            ));
        }
        Ok(())
    }
}

/// Parameters of the `G(n, p)` baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomGraphConfig {
    /// Node count.
    #[serde(default = "default_random_nodes")]
    pub nodes: usize,
    /// Independent edge probability.
    #[serde(default = "default_edge_probability")]
    pub edge_probability: f64,
    /// Master seed.
    #[serde(default = "default_random_seed")]
    pub seed: u64,
    /// Optional substream derived from the master seed.
    #[serde(default)]
    pub substream: Option<u64>,
}

fn default_random_nodes() -> usize {
    989
}

fn default_edge_probability() -> f64 {
    0.03
}

fn default_random_seed() -> u64 {
    4071
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            nodes: default_random_nodes(),
            edge_probability: default_edge_probability(),
            seed: default_random_seed(),
            substream: None,
        }
    }
}

impl RandomGraphConfig {
    fn validate(&self) -> Result<(), CollabError> {
        if self.nodes == 0 {
            return Err(config_error(
                "empty-random-graph",
                "random baseline needs at least one node",
            ));
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(CollabError::Config(
                ErrorInfo::new("invalid-probability", "edge probability must lie in [0, 1]")
                    .with_context("edge_probability", self.edge_probability),
            ));
        }
        Ok(())
    }
}
