use crate::{db::api::view::GraphOps, errors::CentralityError};
use closeness_api::core::entities::VID;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Which nodes an algorithm reports on, results follow the selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeSelection {
    #[default]
    All,
    Single(VID),
    List(Vec<VID>),
    Range(Range<usize>),
}

impl NodeSelection {
    /// Number of nodes selected in `graph`, without validating them.
    pub fn len<G: GraphOps>(&self, graph: &G) -> usize {
        match self {
            NodeSelection::All => graph.num_nodes(),
            NodeSelection::Single(_) => 1,
            NodeSelection::List(nodes) => nodes.len(),
            NodeSelection::Range(range) => range.len(),
        }
    }

    /// Resolve the selection into an ordered list of node ids, failing on the first id that
    /// is not a node of `graph`.
    pub fn resolve<G: GraphOps>(&self, graph: &G) -> Result<Vec<VID>, CentralityError> {
        let num_nodes = graph.num_nodes();
        let check = |v: VID| {
            if graph.has_node(v) {
                Ok(v)
            } else {
                Err(CentralityError::invalid_vertex(v, num_nodes))
            }
        };
        let mut resolved = Vec::new();
        resolved.try_reserve_exact(self.len(graph))?;
        match self {
            NodeSelection::All => resolved.extend((0..num_nodes).map(VID)),
            NodeSelection::Single(v) => resolved.push(check(*v)?),
            NodeSelection::List(nodes) => {
                for &v in nodes {
                    resolved.push(check(v)?);
                }
            }
            NodeSelection::Range(range) => {
                if let Some(last) = range.clone().last() {
                    check(VID(last))?;
                }
                resolved.extend(range.clone().map(VID))
            }
        }
        Ok(resolved)
    }
}

impl From<VID> for NodeSelection {
    fn from(v: VID) -> Self {
        NodeSelection::Single(v)
    }
}

impl From<Vec<VID>> for NodeSelection {
    fn from(nodes: Vec<VID>) -> Self {
        NodeSelection::List(nodes)
    }
}

impl From<&[usize]> for NodeSelection {
    fn from(nodes: &[usize]) -> Self {
        NodeSelection::List(nodes.iter().copied().map(VID).collect())
    }
}

impl From<Range<usize>> for NodeSelection {
    fn from(range: Range<usize>) -> Self {
        NodeSelection::Range(range)
    }
}

impl FromIterator<VID> for NodeSelection {
    fn from_iter<T: IntoIterator<Item = VID>>(iter: T) -> Self {
        NodeSelection::List(iter.into_iter().collect())
    }
}
