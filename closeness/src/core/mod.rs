//! # core
//!
//! Working storage shared by the shortest path engines.
//!
//! Every structure in here is sized once per call (by the number of nodes in the graph) and
//! then reused for every source node of that call, so the number of allocations does not grow
//! with the number of sources.

pub mod heap;
pub mod marker;
pub mod utils;
