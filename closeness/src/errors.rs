use closeness_api::core::{entities::VID, ParseDirectionError};
use config::ConfigError;
use std::collections::TryReserveError;

#[derive(thiserror::Error, Debug)]
pub enum CentralityError {
    #[error("Invalid mode: {source}")]
    InvalidMode {
        #[from]
        source: ParseDirectionError,
    },

    #[error("Invalid weight vector length: expected {expected} (one weight per edge), got {actual}")]
    InvalidWeightsLength { expected: usize, actual: usize },

    #[error("Weight vector must be positive, found minimum weight {min}")]
    NonPositiveWeight { min: f64 },

    #[error("No node with id {vid:?}, the graph has {num_nodes} nodes")]
    InvalidVertex { vid: VID, num_nodes: usize },

    #[error("Cutoff must be a number, got {0}")]
    InvalidCutoff(f64),

    #[error("Not enough memory to allocate working storage")]
    OutOfMemory {
        #[from]
        source: TryReserveError,
    },

    #[error("Closeness computation was cancelled")]
    Cancelled,

    #[cfg(feature = "progress")]
    #[error("Failed to build progress bar: {0}")]
    ProgressBar(String),

    #[error("Failed to load config: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl CentralityError {
    /// Errors caused by the arguments of a call, detected before any traversal starts.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CentralityError::InvalidMode { .. }
                | CentralityError::InvalidWeightsLength { .. }
                | CentralityError::NonPositiveWeight { .. }
                | CentralityError::InvalidVertex { .. }
                | CentralityError::InvalidCutoff(_)
        )
    }

    pub fn invalid_vertex(vid: impl Into<VID>, num_nodes: usize) -> Self {
        CentralityError::InvalidVertex {
            vid: vid.into(),
            num_nodes,
        }
    }
}
