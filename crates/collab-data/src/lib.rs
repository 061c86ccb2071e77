#![deny(missing_docs)]

//! Data access for collaboration networks: YAML configuration, the CSV
//! co-authorship records, the JSON attribute table, and the dispatch that
//! turns a year range and [`GraphMode`] into a freshly built graph.

mod config;
mod dataset;

pub use config::{CollabConfig, DatasetPaths, RandomGraphConfig, YearRange};
pub use dataset::{BuiltGraph, CollabRecord, Dataset, GraphMode};
