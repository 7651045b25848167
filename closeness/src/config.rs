use crate::errors::CentralityError;
use closeness_api::core::Direction;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters of a closeness computation that are not tied to a particular graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosenessConfig {
    /// Which paths are measured in directed graphs.
    pub direction: Direction,
    /// Maximal path length considered, `None` or negative for exact closeness.
    pub cutoff: Option<f64>,
    pub normalized: bool,
    /// Show a progress bar (needs the `progress` feature).
    pub progress: bool,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self {
            direction: Direction::BOTH,
            cutoff: None,
            normalized: true,
            progress: false,
        }
    }
}

pub struct ClosenessConfigBuilder {
    direction: Direction,
    cutoff: Option<f64>,
    normalized: bool,
    progress: bool,
}

impl From<ClosenessConfig> for ClosenessConfigBuilder {
    fn from(config: ClosenessConfig) -> Self {
        Self {
            direction: config.direction,
            cutoff: config.cutoff,
            normalized: config.normalized,
            progress: config.progress,
        }
    }
}

impl Default for ClosenessConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClosenessConfigBuilder {
    pub fn new() -> Self {
        ClosenessConfig::default().into()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the direction from its name, `"out"`, `"in"`, `"both"` or `"all"`.
    pub fn with_mode(mut self, mode: &str) -> Result<Self, CentralityError> {
        self.direction = mode.parse()?;
        Ok(self)
    }

    pub fn with_cutoff(mut self, cutoff: Option<f64>) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn build(self) -> ClosenessConfig {
        ClosenessConfig {
            direction: self.direction,
            cutoff: self.cutoff,
            normalized: self.normalized,
            progress: self.progress,
        }
    }
}

// Order of precedence: config path >> config args >> config default.
// Keys missing from the file keep the value given in `config`.
pub fn load_config(
    config: Option<ClosenessConfig>,
    config_path: Option<PathBuf>,
) -> Result<ClosenessConfig, CentralityError> {
    let config = config.unwrap_or_default();
    let json =
        serde_json::to_string(&config).map_err(|err| ConfigError::Foreign(Box::new(err)))?;
    let mut builder = Config::builder().add_source(File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(File::from(config_path));
    }
    Ok(builder.build()?.try_deserialize::<ClosenessConfig>()?)
}
