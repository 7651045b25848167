//! Generates a graph using the Erdős-Rényi model
//!
//! # Examples
//!
//! ```
//! use closeness::graphgen::erdos_renyi::erdos_renyi;
//! let graph = erdos_renyi(1000, 0.01, false, Some(42));
//! ```

use super::rng;
use crate::db::graph::graph::Graph;
use rand::Rng;

/// Generates an Erdős-Rényi random graph and returns it.
///
/// # Arguments
/// * `num_nodes` - Number of nodes to create in the graph.
/// * `p` - Probability of edge creation between any two nodes (0.0 = no edges, 1.0 = fully connected).
///   Values outside `[0, 1]` are clamped.
/// * `directed` - If `true` each ordered pair gets its own coin flip, otherwise each unordered pair.
/// * `seed` - Optional 64-bit seed for deterministic random generation. If `None`, uses entropy.
///
/// Node ids are `0..num_nodes` and self-loops are never created.
pub fn erdos_renyi(num_nodes: usize, p: f64, directed: bool, seed: Option<u64>) -> Graph {
    let mut rng = rng(seed);
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let mut graph = Graph::new(num_nodes, directed);
    for i in 0..num_nodes {
        let start = if directed { 0 } else { i + 1 };
        for j in start..num_nodes {
            if i != j && rng.gen_bool(p) {
                let _ = graph.add_edge(i, j);
            }
        }
    }
    graph
}
