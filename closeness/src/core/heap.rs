//! An indexed binary min-heap keyed by `f64` distances.
//!
//! Items are node ids in `0..capacity`. The heap keeps the position of every queued node so
//! the key of a queued node can be lowered in place, which is what Dijkstra's relaxation step
//! needs.

use closeness_api::core::entities::VID;
use std::collections::TryReserveError;

const NOT_QUEUED: usize = usize::MAX;

#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    // (key, node) pairs in heap order
    data: Vec<(f64, VID)>,
    // position of each node in `data`, NOT_QUEUED if absent
    index: Vec<usize>,
}

impl IndexedMinHeap {
    /// Create a heap able to hold every node id below `capacity` without reallocating.
    pub fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        let mut index = Vec::new();
        index.try_reserve_exact(capacity)?;
        index.resize(capacity, NOT_QUEUED);
        Ok(Self { data, index })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove all queued nodes, only touching the nodes that are currently queued.
    pub fn clear(&mut self) {
        for (_, node) in self.data.drain(..) {
            self.index[node.index()] = NOT_QUEUED;
        }
    }

    pub fn contains(&self, node: VID) -> bool {
        self.index[node.index()] != NOT_QUEUED
    }

    pub fn key(&self, node: VID) -> Option<f64> {
        match self.index[node.index()] {
            NOT_QUEUED => None,
            pos => Some(self.data[pos].0),
        }
    }

    pub fn peek(&self) -> Option<(VID, f64)> {
        self.data.first().map(|&(key, node)| (node, key))
    }

    /// Queue `node` with `key`. The node must not be queued already.
    pub fn push(&mut self, node: VID, key: f64) {
        debug_assert!(!self.contains(node), "{node:?} is already queued");
        let pos = self.data.len();
        self.data.push((key, node));
        self.index[node.index()] = pos;
        self.sift_up(pos);
    }

    /// Remove and return the node with the smallest key.
    pub fn pop(&mut self) -> Option<(VID, f64)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap(0, last);
        let (key, node) = self.data.pop()?;
        self.index[node.index()] = NOT_QUEUED;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((node, key))
    }

    /// Lower the key of a queued node. Returns `false` (and does nothing) if the node is not
    /// queued or `key` is not smaller than its current key.
    pub fn decrease_key(&mut self, node: VID, key: f64) -> bool {
        let pos = self.index[node.index()];
        if pos == NOT_QUEUED || !(key < self.data[pos].0) {
            return false;
        }
        self.data[pos].0 = key;
        self.sift_up(pos);
        true
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.data.swap(a, b);
        self.index[self.data[a].1.index()] = a;
        self.index[self.data[b].1.index()] = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos].0 < self.data[parent].0 {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}
