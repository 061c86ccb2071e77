//! Node centrality scores, indexed by node position.
//!
//! Every function returns one score per node in insertion order, so
//! `scores[node.index()]` is the score of `node`.

use std::collections::VecDeque;

use collab_core::errors::{CollabError, ErrorInfo};
use collab_graph::CollabGraph;

const EIGENVECTOR_MAX_ITERS: usize = 100;
const EIGENVECTOR_TOLERANCE: f64 = 1e-6;

/// Degree centrality `deg / (n - 1)`; every node scores `1` when `n == 1`.
pub fn degree_centrality(graph: &CollabGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n == 1 {
        return vec![1.0];
    }
    let scale = 1.0 / (n as f64 - 1.0);
    graph.degrees().into_iter().map(|d| d as f64 * scale).collect()
}

/// Eigenvector centrality by power iteration on `A + I`.
///
/// Starts from the uniform vector, normalises by the L2 norm each round and
/// stops once the L1 change drops below `n * 1e-6`.
pub fn eigenvector_centrality(graph: &CollabGraph) -> Result<Vec<f64>, CollabError> {
    let n = graph.node_count();
    if n == 0 {
        return Err(CollabError::empty_graph("eigenvector-centrality"));
    }
    let mut current = vec![1.0 / n as f64; n];
    for _ in 0..EIGENVECTOR_MAX_ITERS {
        let mut next = current.clone();
        for node in graph.nodes() {
            let weight = current[node.index()];
            for neighbour in graph.neighbors(node) {
                next[neighbour.index()] += weight;
            }
        }
        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        let norm = if norm == 0.0 { 1.0 } else { norm };
        for value in next.iter_mut() {
            *value /= norm;
        }
        let change: f64 = next
            .iter()
            .zip(&current)
            .map(|(a, b)| (a - b).abs())
            .sum();
        current = next;
        if change < n as f64 * EIGENVECTOR_TOLERANCE {
            return Ok(current);
        }
    }
    Err(CollabError::Convergence(
        ErrorInfo::new(
            "power-iteration",
            "eigenvector centrality did not converge",
        )
        .with_context("iterations", EIGENVECTOR_MAX_ITERS)
        .with_context("nodes", n),
    ))
}

/// Betweenness centrality via Brandes accumulation over every source.
///
/// Scores are multiplied by `1 / ((n - 1)(n - 2))` when `n > 2`.
pub fn betweenness_centrality(graph: &CollabGraph) -> Vec<f64> {
    let n = graph.node_count();
    let mut scores = vec![0.0; n];
    let mut sigma = vec![0.0_f64; n];
    let mut dist = vec![usize::MAX; n];
    let mut delta = vec![0.0_f64; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut stack = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    for source in graph.nodes() {
        let s = source.index();
        sigma.iter_mut().for_each(|x| *x = 0.0);
        dist.iter_mut().for_each(|x| *x = usize::MAX);
        delta.iter_mut().for_each(|x| *x = 0.0);
        predecessors.iter_mut().for_each(Vec::clear);
        stack.clear();

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            let vi = v.index();
            stack.push(vi);
            for w in graph.neighbors(v) {
                let wi = w.index();
                if dist[wi] == usize::MAX {
                    dist[wi] = dist[vi] + 1;
                    queue.push_back(*w);
                }
                if dist[wi] == dist[vi] + 1 {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(vi);
                }
            }
        }

        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                scores[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n as f64 - 1.0) * (n as f64 - 2.0));
        scores.iter_mut().for_each(|x| *x *= scale);
    }
    scores
}

/// Closeness centrality with the Wasserman–Faust component correction.
///
/// For a node reaching `r` nodes (itself included) at total distance `s`,
/// the score is `((r - 1) / s) * ((r - 1) / (n - 1))`, and `0` when nothing
/// is reachable.
pub fn closeness_centrality(graph: &CollabGraph) -> Vec<f64> {
    let n = graph.node_count();
    let mut dist = vec![usize::MAX; n];
    let mut queue = VecDeque::new();
    graph
        .nodes()
        .map(|source| {
            dist.iter_mut().for_each(|x| *x = usize::MAX);
            dist[source.index()] = 0;
            queue.push_back(source);
            let mut reached = 0usize;
            let mut total = 0usize;
            while let Some(v) = queue.pop_front() {
                for w in graph.neighbors(v) {
                    if dist[w.index()] == usize::MAX {
                        dist[w.index()] = dist[v.index()] + 1;
                        reached += 1;
                        total += dist[w.index()];
                        queue.push_back(*w);
                    }
                }
            }
            if total == 0 || n <= 1 {
                0.0
            } else {
                let r = reached as f64;
                (r / total as f64) * (r / (n as f64 - 1.0))
            }
        })
        .collect()
}
