//! # closeness
//!
//! Closeness centrality for directed and undirected graphs, with optional positive edge
//! weights and an optional distance cutoff.
//!
//! The crate is organised as follows:
//!
//! * `algorithms` - the closeness entry points and the generic per-node result container.
//! * `db` - the [`GraphOps`](db::api::view::GraphOps) query trait, an in-memory
//!   [`Graph`](db::graph::graph::Graph) and node selections.
//! * `core` - working storage shared by the traversals, progress reporting and cancellation.
//! * `config` - a serde configuration that can be layered from a file.
//! * `graphgen` - random and regular graph generators for tests and benchmarks.
//!
//! # Example
//!
//! ```
//! use closeness::prelude::*;
//!
//! let g = Graph::from_edges(4, false, [(0, 1), (1, 2), (2, 3)]).unwrap();
//! let result = closeness(&g, VID(1), Direction::BOTH, None, true).unwrap();
//! assert_eq!(result.scores(), &[0.75]);
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod graphgen;

pub mod prelude {
    pub use crate::{
        algorithms::{
            algorithm_result::AlgorithmResult,
            centrality::closeness::{
                closeness, closeness_centrality, closeness_centrality_from_config,
                closeness_centrality_with, ClosenessResult, ClosenessWarning,
            },
        },
        config::{ClosenessConfig, ClosenessConfigBuilder},
        core::utils::{
            interrupt::{Interrupt, NoInterrupt},
            progress::{NoProgress, Progress, TracingProgress},
        },
        db::{
            api::view::GraphOps,
            graph::{graph::Graph, nodes::NodeSelection},
        },
        errors::CentralityError,
    };
    pub use closeness_api::core::{
        entities::{EID, VID},
        Direction,
    };
}
