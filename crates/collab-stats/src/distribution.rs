use std::collections::BTreeMap;

use collab_graph::CollabGraph;
use serde::{Deserialize, Serialize};

/// One bucket of the degree histogram with its log-log coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreePoint {
    /// Raw degree.
    pub degree: usize,
    /// Number of nodes with that degree.
    pub count: usize,
    /// `log10(degree)`, with the degree-zero bucket mapped to `0`.
    pub log_degree: f64,
    /// `log10(count)`.
    pub log_count: f64,
}

/// Groups nodes by degree, highest degree first.
pub fn compute_degree_distribution(graph: &CollabGraph) -> Vec<DegreePoint> {
    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    for degree in graph.degrees() {
        *histogram.entry(degree).or_default() += 1;
    }
    histogram
        .into_iter()
        .rev()
        .map(|(degree, count)| DegreePoint {
            degree,
            count,
            log_degree: if degree == 0 { 0.0 } else { (degree as f64).log10() },
            log_count: (count as f64).log10(),
        })
        .collect()
}
