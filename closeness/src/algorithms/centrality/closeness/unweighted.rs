use super::{Cutoff, DistanceEngine, SourceDistances};
use crate::{core::marker::VisitMarker, db::api::view::GraphOps};
use closeness_api::core::{entities::VID, Direction};
use std::collections::{TryReserveError, VecDeque};

/// Breadth first search distances, every edge has length 1.
pub(super) struct UnweightedEngine<'a, G> {
    graph: &'a G,
    direction: Direction,
    cutoff: Cutoff,
    queue: VecDeque<(VID, usize)>,
    marker: VisitMarker,
}

impl<'a, G: GraphOps> UnweightedEngine<'a, G> {
    pub(super) fn new(
        graph: &'a G,
        direction: Direction,
        cutoff: Cutoff,
    ) -> Result<Self, TryReserveError> {
        let mut queue = VecDeque::new();
        queue.try_reserve_exact(graph.num_nodes())?;
        Ok(Self {
            graph,
            direction,
            cutoff,
            queue,
            marker: VisitMarker::new(graph.num_nodes())?,
        })
    }
}

impl<G: GraphOps> DistanceEngine for UnweightedEngine<'_, G> {
    fn traverse(&mut self, source: VID) -> SourceDistances {
        self.marker.next_generation();
        self.queue.clear();
        self.marker.mark(source);
        self.queue.push_back((source, 0));

        let mut sum = 0.0;
        let mut reached = 0;
        let mut last_distance = 0.0;

        while let Some((node, dist)) = self.queue.pop_front() {
            last_distance = dist as f64;
            // beyond the cutoff: drained but neither counted nor expanded
            if self.cutoff.exceeds(last_distance) {
                continue;
            }
            sum += last_distance;
            reached += 1;

            for nb in self.graph.neighbours(node, self.direction) {
                if self.marker.mark(nb) {
                    self.queue.push_back((nb, dist + 1));
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
