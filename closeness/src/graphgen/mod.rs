//! Provides functionality for generating graphs for testing and benchmarking.

use crate::db::graph::graph::Graph;
use rand::{rngs::StdRng, SeedableRng};

pub mod erdos_renyi;
pub mod random_attachment;

pub(crate) fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// An undirected path `0 - 1 - ... - (n - 1)`.
pub fn path(n: usize) -> Graph {
    let mut graph = Graph::undirected(n);
    for i in 1..n {
        // both endpoints exist
        let _ = graph.add_edge(i - 1, i);
    }
    graph
}

/// The complete graph on `n` nodes, one edge per ordered pair if `directed`.
pub fn complete(n: usize, directed: bool) -> Graph {
    let mut graph = Graph::new(n, directed);
    for i in 0..n {
        let targets = if directed { 0..n } else { i + 1..n };
        for j in targets.filter(|&j| j != i) {
            let _ = graph.add_edge(i, j);
        }
    }
    graph
}
