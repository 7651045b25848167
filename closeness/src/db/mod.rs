pub mod api;
pub mod graph;
