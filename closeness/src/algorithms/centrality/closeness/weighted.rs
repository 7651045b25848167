use super::{Cutoff, DistanceEngine, SourceDistances};
use crate::{
    core::{heap::IndexedMinHeap, marker::VisitMarker},
    db::{api::view::GraphOps, graph::incidence::LazyIncidenceList},
    errors::CentralityError,
};
use closeness_api::core::{entities::VID, Direction};
use std::{cmp::Ordering, collections::TryReserveError};

/// Tolerance used when comparing path lengths.
///
/// A tentative distance replaces the known one only if it is shorter by more than this.
pub const SHORTEST_PATH_EPSILON: f64 = 1e-10;

/// Compare two distances, treating values less than `eps` apart as equal.
pub(crate) fn cmp_epsilon(a: f64, b: f64, eps: f64) -> Ordering {
    // infinities compare equal to themselves
    if a == b || (a - b).abs() < eps {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Check that there is one strictly positive weight per edge and return the smallest one.
///
/// A NaN weight makes the minimum NaN, which is rejected.
pub(crate) fn validate_weights<G: GraphOps>(
    graph: &G,
    weights: &[f64],
) -> Result<f64, CentralityError> {
    if weights.len() != graph.num_edges() {
        return Err(CentralityError::InvalidWeightsLength {
            expected: graph.num_edges(),
            actual: weights.len(),
        });
    }
    // an edgeless graph has minimum weight infinity and passes
    let min = weights.iter().copied().fold(f64::INFINITY, |min, w| {
        if min.is_nan() || w.is_nan() {
            f64::NAN
        } else {
            min.min(w)
        }
    });
    if min.is_nan() || min <= 0.0 {
        return Err(CentralityError::NonPositiveWeight { min });
    }
    Ok(min)
}

/// Dijkstra distances over strictly positive edge weights.
pub(super) struct WeightedEngine<'a, G> {
    weights: &'a [f64],
    cutoff: Cutoff,
    inclist: LazyIncidenceList<'a, G>,
    heap: IndexedMinHeap,
    dist: Vec<f64>,
    marker: VisitMarker,
}

impl<'a, G: GraphOps> WeightedEngine<'a, G> {
    pub(super) fn new(
        graph: &'a G,
        weights: &'a [f64],
        direction: Direction,
        cutoff: Cutoff,
    ) -> Result<Self, TryReserveError> {
        let n = graph.num_nodes();
        let mut dist = Vec::new();
        dist.try_reserve_exact(n)?;
        dist.resize(n, f64::INFINITY);
        Ok(Self {
            weights,
            cutoff,
            inclist: LazyIncidenceList::new(graph, direction)?,
            heap: IndexedMinHeap::with_capacity(n)?,
            dist,
            marker: VisitMarker::new(n)?,
        })
    }
}

impl<G: GraphOps> DistanceEngine for WeightedEngine<'_, G> {
    fn traverse(&mut self, source: VID) -> SourceDistances {
        self.marker.next_generation();
        self.heap.clear();
        self.marker.mark(source);
        self.dist[source.index()] = 0.0;
        self.heap.push(source, 0.0);

        let mut sum = 0.0;
        let mut reached = 0;
        let mut last_distance = 0.0;

        while let Some((node, dist)) = self.heap.pop() {
            last_distance = dist;
            if self.cutoff.exceeds(dist) {
                continue;
            }
            sum += dist;
            reached += 1;

            let graph = self.inclist.graph();
            for &e in self.inclist.get(node) {
                let nb = graph.other_endpoint(e, node);
                let alt = dist + self.weights[e.index()];
                if self.marker.mark(nb) {
                    self.dist[nb.index()] = alt;
                    self.heap.push(nb, alt);
                } else if cmp_epsilon(alt, self.dist[nb.index()], SHORTEST_PATH_EPSILON)
                    == Ordering::Less
                    && self.heap.decrease_key(nb, alt)
                {
                    // settled nodes are no longer queued and keep their distance
                    self.dist[nb.index()] = alt;
                }
            }
        }

        SourceDistances {
            sum,
            reached,
            last_distance,
        }
    }
}
