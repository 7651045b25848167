pub mod graph;
pub mod incidence;
pub mod nodes;
