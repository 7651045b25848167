//! Generates a graph using the random attachment model
//!
//! This function is a graph generation model based upon:
//! Callaway, Duncan S., et al. "Are randomly grown graphs really random?."
//! Physical Review E 64.4 (2001): 041902.
//!
//! # Examples
//!
//! ```
//! use closeness::graphgen::random_attachment::random_attachment;
//! use closeness::prelude::*;
//! let mut graph = Graph::undirected(0);
//! random_attachment(&mut graph, 1000, 10, Some(42));
//! ```

use super::rng;
use crate::db::{api::view::GraphOps, graph::graph::Graph};
use closeness_api::core::entities::VID;
use rand::seq::SliceRandom;

/// Given a graph this function will add a user defined number of nodes, each with a
/// user defined number of edges.
/// This is an iterative algorithm where at each `step` a node is added and its neighbours
/// are chosen from the pool of nodes already within the network.
/// For this model the neighbours are chosen purely at random. This sampling is done
/// without replacement.
///
/// **Note:**  If the provided graph doesnt have enough nodes for the initial sample,
/// isolated nodes are added before generation begins.
///
/// # Arguments
/// * `graph` - The graph you wish to add nodes and edges to
/// * `nodes_to_add` - The amount of nodes you wish to add to the graph (steps)
/// * `edges_per_step` - The amount of edges a joining node should add to the graph
/// * `seed` - Optional 64-bit seed for deterministic random generation
pub fn random_attachment(
    graph: &mut Graph,
    nodes_to_add: usize,
    edges_per_step: usize,
    seed: Option<u64>,
) {
    let mut rng = rng(seed);
    let mut ids: Vec<VID> = (0..graph.num_nodes()).map(VID).collect();

    while ids.len() < edges_per_step {
        ids.push(graph.add_node());
    }

    for _ in 0..nodes_to_add {
        let neighbours: Vec<VID> = ids
            .choose_multiple(&mut rng, edges_per_step)
            .copied()
            .collect();
        let new_node = graph.add_node();
        for neighbour in neighbours {
            // both endpoints exist
            let _ = graph.add_edge(new_node.index(), neighbour.index());
        }
        ids.push(new_node);
    }
}
