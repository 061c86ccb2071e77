use std::fs;
use std::path::Path;

use collab_core::errors::{CollabError, ErrorInfo};
use collab_core::rng::RngHandle;
use collab_core::AttributeTable;
use collab_graph::{gen_gnp, CollabGraph};
use collab_recon::{reconstruct, ReconstructionOptions, ReconstructionReport};
use serde::{Deserialize, Serialize};

use crate::config::{CollabConfig, RandomGraphConfig, YearRange};

fn dataset_error(code: &str, path: &Path, err: impl ToString) -> CollabError {
    CollabError::Dataset(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display()),
    )
}

/// Graph variant produced by [`Dataset::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphMode {
    /// Co-authorship graph of the selected years.
    #[default]
    Actual,
    /// Seeded `G(n, p)` baseline; the year range is ignored.
    Random,
    /// Actual graph after attribute-aware reconstruction.
    Reconstructed,
}

/// One co-authorship row of the edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollabRecord {
    /// Publication year.
    pub year: i32,
    /// First author id.
    pub author_pid: String,
    /// Co-author id.
    pub coauthor_pid: String,
}

/// Graph built for one query, with the reconstruction report when one ran.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    /// Mode the graph was built in.
    pub mode: GraphMode,
    /// The freshly built graph.
    pub graph: CollabGraph,
    /// Present only for [`GraphMode::Reconstructed`].
    pub reconstruction: Option<ReconstructionReport>,
}

/// Read-only collaboration dataset loaded once per process.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<CollabRecord>,
    attributes: AttributeTable,
    random: RandomGraphConfig,
    reconstruction: ReconstructionOptions,
}

impl Dataset {
    /// Assembles a dataset from already loaded parts.
    pub fn new(
        records: Vec<CollabRecord>,
        attributes: AttributeTable,
        random: RandomGraphConfig,
        reconstruction: ReconstructionOptions,
    ) -> Self {
        Self {
            records,
            attributes,
            random,
            reconstruction,
        }
    }

    /// Loads the edge list and the optional attribute table named by `config`.
    pub fn load(config: &CollabConfig) -> Result<Self, CollabError> {
        let records = read_records(&config.dataset.edges)?;
        let attributes = match &config.dataset.attributes {
            Some(path) => read_attributes(path)?,
            None => {
                tracing::warn!("no attribute table configured; reconstruction sees no attributes");
                AttributeTable::new()
            }
        };
        tracing::info!(
            records = records.len(),
            attributed_authors = attributes.len(),
            "dataset loaded"
        );
        Ok(Self::new(
            records,
            attributes,
            config.random,
            config.reconstruction,
        ))
    }

    /// All records in file order.
    pub fn records(&self) -> &[CollabRecord] {
        &self.records
    }

    /// Attribute side table.
    pub fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    /// Builds a new graph for `range` in the requested mode.
    pub fn build_graph(&self, range: YearRange, mode: GraphMode) -> Result<CollabGraph, CollabError> {
        self.build(range, mode).map(|built| built.graph)
    }

    /// Builds a new graph and keeps the reconstruction report, if any.
    pub fn build(&self, range: YearRange, mode: GraphMode) -> Result<BuiltGraph, CollabError> {
        let (graph, reconstruction) = match mode {
            GraphMode::Actual => (self.actual_graph(range)?, None),
            GraphMode::Random => (self.random_graph()?, None),
            GraphMode::Reconstructed => {
                let mut graph = self.actual_graph(range)?;
                self.attach_attributes(&mut graph)?;
                let report = reconstruct(&mut graph, &self.reconstruction)?;
                (graph, Some(report))
            }
        };
        tracing::debug!(
            ?mode,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(BuiltGraph {
            mode,
            graph,
            reconstruction,
        })
    }

    /// Co-authorship graph of the records inside `range`, in record order.
    ///
    /// A self-collaboration record adds its author but no edge; repeated
    /// pairs collapse into one edge.
    fn actual_graph(&self, range: YearRange) -> Result<CollabGraph, CollabError> {
        range.validate()?;
        let mut graph = CollabGraph::new();
        let mut self_loops = 0usize;
        for record in self.records.iter().filter(|r| range.contains(r.year)) {
            let author = graph.add_node(record.author_pid.as_str());
            let coauthor = graph.add_node(record.coauthor_pid.as_str());
            if author == coauthor {
                self_loops += 1;
                continue;
            }
            graph.add_edge(author, coauthor)?;
        }
        if self_loops > 0 {
            tracing::debug!(self_loops, "skipped self-collaboration records");
        }
        Ok(graph)
    }

    fn random_graph(&self) -> Result<CollabGraph, CollabError> {
        let mut rng = RngHandle::for_stream(self.random.seed, self.random.substream);
        gen_gnp(self.random.nodes, self.random.edge_probability, &mut rng)
    }

    fn attach_attributes(&self, graph: &mut CollabGraph) -> Result<(), CollabError> {
        let nodes: Vec<_> = graph.nodes().collect();
        let mut missing = 0usize;
        for node in nodes {
            let key = graph.label(node).to_string();
            match self.attributes.get(&key) {
                Some(attrs) => graph.set_attributes(node, attrs.clone())?,
                None => missing += 1,
            }
        }
        if missing > 0 {
            tracing::debug!(missing, "authors without attributes fall back to the last tier");
        }
        Ok(())
    }
}

fn read_records(path: &Path) -> Result<Vec<CollabRecord>, CollabError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| dataset_error("dataset-read", path, err))?;
    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<CollabRecord>().enumerate() {
        let record = result.map_err(|err| {
            CollabError::Dataset(
                ErrorInfo::new("dataset-record", err.to_string())
                    .with_context("path", path.display())
                    .with_context("row", row + 1),
            )
        })?;
        records.push(record);
    }
    Ok(records)
}

fn read_attributes(path: &Path) -> Result<AttributeTable, CollabError> {
    let contents =
        fs::read_to_string(path).map_err(|err| dataset_error("attributes-read", path, err))?;
    serde_json::from_str(&contents).map_err(|err| {
        CollabError::Dataset(
            ErrorInfo::new("attributes-parse", err.to_string())
                .with_context("path", path.display())
                .with_hint("expected an object of author id to {country, institute, expertise}"),
        )
    })
}
