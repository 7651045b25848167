use closeness_api::core::{
    entities::{EID, VID},
    Direction,
};

/// This trait GraphOps defines the queries shortest path algorithms need from a graph.
///
/// Nodes are dense ids in `0..num_nodes()` and edges are dense ids in `0..num_edges()`.
/// The graph must not change while an algorithm holds a reference to it.
pub trait GraphOps {
    /// Number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Whether the `direction` argument of the traversal methods is meaningful.
    fn is_directed(&self) -> bool;

    /// Source and destination of an edge, in insertion order for undirected graphs.
    fn edge_endpoints(&self, e: EID) -> (VID, VID);

    /// Ids of the edges incident on `v` that can be followed in `direction`.
    ///
    /// Undirected graphs ignore `direction` and return every incident edge. Parallel edges are
    /// returned once each.
    fn incident_edges(&self, v: VID, direction: Direction) -> impl Iterator<Item = EID> + '_;

    /// The endpoint of `e` that is not `v` (or `v` itself for a self-loop).
    fn other_endpoint(&self, e: EID, v: VID) -> VID {
        let (src, dst) = self.edge_endpoints(e);
        if src == v {
            dst
        } else {
            src
        }
    }

    /// Nodes reachable from `v` over one edge in `direction`, one entry per incident edge.
    fn neighbours(&self, v: VID, direction: Direction) -> impl Iterator<Item = VID> + '_ {
        self.incident_edges(v, direction)
            .map(move |e| self.other_endpoint(e, v))
    }

    fn degree(&self, v: VID, direction: Direction) -> usize {
        self.incident_edges(v, direction).count()
    }

    fn has_node(&self, v: VID) -> bool {
        v.index() < self.num_nodes()
    }
}

impl<G: GraphOps> GraphOps for &G {
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    fn num_edges(&self) -> usize {
        (**self).num_edges()
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn edge_endpoints(&self, e: EID) -> (VID, VID) {
        (**self).edge_endpoints(e)
    }

    fn incident_edges(&self, v: VID, direction: Direction) -> impl Iterator<Item = EID> + '_ {
        (**self).incident_edges(v, direction)
    }
}
