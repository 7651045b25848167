use crate::db::api::view::GraphOps;
use closeness_api::core::{
    entities::{EID, VID},
    Direction,
};
use std::collections::TryReserveError;

/// Incident edge lists for a fixed direction, materialised per node on first access.
///
/// Nodes that are never expanded by a traversal never pay for their list.
#[derive(Debug)]
pub struct LazyIncidenceList<'a, G> {
    graph: &'a G,
    direction: Direction,
    lists: Vec<Option<Vec<EID>>>,
}

impl<'a, G: GraphOps> LazyIncidenceList<'a, G> {
    pub fn new(graph: &'a G, direction: Direction) -> Result<Self, TryReserveError> {
        let mut lists = Vec::new();
        lists.try_reserve_exact(graph.num_nodes())?;
        lists.resize_with(graph.num_nodes(), || None);
        Ok(Self {
            graph,
            direction,
            lists,
        })
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of nodes whose list has been built so far.
    pub fn num_cached(&self) -> usize {
        self.lists.iter().filter(|list| list.is_some()).count()
    }

    pub fn get(&mut self, v: VID) -> &[EID] {
        let (graph, direction) = (self.graph, self.direction);
        self.lists[v.index()].get_or_insert_with(|| graph.incident_edges(v, direction).collect())
    }
}
