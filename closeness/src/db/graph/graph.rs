//! An in-memory adjacency list graph.
//!
//! # Examples
//!
//! ```
//! use closeness::prelude::*;
//!
//! let mut g = Graph::new(3, false);
//! g.add_edge(0, 1).unwrap();
//! g.add_edge(1, 2).unwrap();
//!
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.neighbours(VID(1), Direction::OUT).count(), 2);
//! ```

use crate::{db::api::view::GraphOps, errors::CentralityError};
use closeness_api::core::{
    entities::{EID, VID},
    Direction,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    directed: bool,
    edges: Vec<(VID, VID)>,
    // edge ids keyed by source
    out_adj: Vec<Vec<EID>>,
    // edge ids keyed by destination
    in_adj: Vec<Vec<EID>>,
}

impl Graph {
    /// Create a graph with `num_nodes` isolated nodes.
    pub fn new(num_nodes: usize, directed: bool) -> Self {
        Self {
            directed,
            edges: Vec::new(),
            out_adj: vec![Vec::new(); num_nodes],
            in_adj: vec![Vec::new(); num_nodes],
        }
    }

    pub fn directed(num_nodes: usize) -> Self {
        Self::new(num_nodes, true)
    }

    pub fn undirected(num_nodes: usize) -> Self {
        Self::new(num_nodes, false)
    }

    /// Build a graph from `(src, dst)` pairs.
    pub fn from_edges<I: IntoIterator<Item = (usize, usize)>>(
        num_nodes: usize,
        directed: bool,
        edges: I,
    ) -> Result<Self, CentralityError> {
        let mut graph = Self::new(num_nodes, directed);
        for (src, dst) in edges {
            graph.add_edge(src, dst)?;
        }
        Ok(graph)
    }

    /// Append an isolated node and return its id.
    pub fn add_node(&mut self) -> VID {
        let vid = VID(self.out_adj.len());
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        vid
    }

    /// Add an edge and return its id. Parallel edges and self-loops are allowed.
    pub fn add_edge(&mut self, src: usize, dst: usize) -> Result<EID, CentralityError> {
        let (src, dst) = (VID(src), VID(dst));
        for v in [src, dst] {
            if !self.has_node(v) {
                return Err(CentralityError::invalid_vertex(v, self.num_nodes()));
            }
        }
        let eid = EID(self.edges.len());
        self.edges.push((src, dst));
        self.out_adj[src.index()].push(eid);
        self.in_adj[dst.index()].push(eid);
        Ok(eid)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EID, VID, VID)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(e, &(src, dst))| (EID(e), src, dst))
    }
}

impl GraphOps for Graph {
    fn num_nodes(&self) -> usize {
        self.out_adj.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edge_endpoints(&self, e: EID) -> (VID, VID) {
        self.edges[e.index()]
    }

    fn incident_edges(&self, v: VID, direction: Direction) -> impl Iterator<Item = EID> + '_ {
        let (use_out, use_in) = if self.directed {
            (direction.has_out(), direction.has_in())
        } else {
            (true, true)
        };
        let out: &[EID] = if use_out { &self.out_adj[v.index()] } else { &[] };
        let into: &[EID] = if use_in { &self.in_adj[v.index()] } else { &[] };
        out.iter().chain(into).copied()
    }
}
