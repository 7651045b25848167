use closeness_api::core::entities::VID;
use std::collections::TryReserveError;

/// Per-node visitation stamps that are never cleared between traversals.
///
/// A node counts as marked iff its stamp equals the current generation. Starting a new
/// traversal bumps the generation, which unmarks every node in O(1).
#[derive(Debug, Clone)]
pub struct VisitMarker {
    stamps: Vec<u32>,
    generation: u32,
}

impl VisitMarker {
    pub fn new(num_nodes: usize) -> Result<Self, TryReserveError> {
        let mut stamps = Vec::new();
        stamps.try_reserve_exact(num_nodes)?;
        stamps.resize(num_nodes, 0);
        Ok(Self {
            stamps,
            generation: 0,
        })
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Start a new traversal, unmarking all nodes.
    pub fn next_generation(&mut self) {
        match self.generation.checked_add(1) {
            Some(generation) => self.generation = generation,
            None => {
                // stamps from old generations would alias after wrapping
                self.stamps.fill(0);
                self.generation = 1;
            }
        }
    }

    pub fn is_marked(&self, node: VID) -> bool {
        self.stamps[node.index()] == self.generation
    }

    /// Mark `node` for the current generation. Returns `true` if it was not marked before.
    pub fn mark(&mut self, node: VID) -> bool {
        let stamp = &mut self.stamps[node.index()];
        if *stamp == self.generation {
            false
        } else {
            *stamp = self.generation;
            true
        }
    }
}
