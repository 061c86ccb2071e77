pub mod degree_dist;
pub mod reconstruct;
pub mod stats;

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use collab_core::AttributeTable;
use collab_data::{BuiltGraph, CollabConfig, Dataset, GraphMode, YearRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Actual,
    Random,
    Reconstructed,
}

impl From<ModeArg> for GraphMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Actual => GraphMode::Actual,
            ModeArg::Random => GraphMode::Random,
            ModeArg::Reconstructed => GraphMode::Reconstructed,
        }
    }
}

/// Dataset location and year range.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// YAML configuration naming the dataset files.
    #[arg(long)]
    pub config: PathBuf,
    /// First year included (defaults to the configured range).
    #[arg(long)]
    pub from: Option<i32>,
    /// Last year included (defaults to the configured range).
    #[arg(long)]
    pub to: Option<i32>,
}

impl SourceArgs {
    pub fn build(&self, mode: GraphMode) -> Result<BuiltGraph, Box<dyn Error>> {
        let config = CollabConfig::load(&self.config)?;
        let range = YearRange::new(
            self.from.unwrap_or(config.years.start),
            self.to.unwrap_or(config.years.end),
        )?;
        // the random baseline never reads the dataset files
        let dataset = match mode {
            GraphMode::Random => Dataset::new(
                Vec::new(),
                AttributeTable::new(),
                config.random,
                config.reconstruction,
            ),
            _ => Dataset::load(&config)?,
        };
        tracing::debug!(?mode, start = range.start, end = range.end, "building graph");
        Ok(dataset.build(range, mode)?)
    }
}

/// Source options plus the graph variant.
#[derive(Args, Debug)]
pub struct GraphArgs {
    #[command(flatten)]
    pub source: SourceArgs,
    /// Graph variant to build.
    #[arg(long, value_enum, default_value_t = ModeArg::Actual)]
    pub mode: ModeArg,
}

impl GraphArgs {
    pub fn build(&self) -> Result<BuiltGraph, Box<dyn Error>> {
        self.source.build(self.mode.into())
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
