//! The read-only graph surface algorithms are written against.

mod graph;

pub use graph::GraphOps;
