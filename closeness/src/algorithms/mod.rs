//! Implementations of graph algorithms that can be run on any [`GraphOps`](crate::db::api::view::GraphOps).
//!
//! To run an algorithm simply import the module and call the function.
//!
//! # Examples
//!
//! ```rust
//! use closeness::algorithms::centrality::closeness::closeness;
//! use closeness::prelude::*;
//!
//! let g = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]).unwrap();
//! let result = closeness(&g, NodeSelection::All, Direction::BOTH, None, true).unwrap();
//! println!("{}", result.repr());
//! ```

pub mod algorithm_result;
pub mod centrality;
