use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub mod entities;
pub mod utils;

/// Denotes the direction of an edge. Can be incoming, outgoing or both.
///
/// For undirected graphs all three directions are equivalent.
#[derive(Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "out")]
    OUT,
    #[serde(rename = "in")]
    IN,
    #[default]
    #[serde(rename = "both", alias = "all")]
    BOTH,
}

impl Direction {
    /// Whether edges leaving a node are followed.
    pub fn has_out(&self) -> bool {
        matches!(self, Direction::OUT | Direction::BOTH)
    }

    /// Whether edges entering a node are followed.
    pub fn has_in(&self) -> bool {
        matches!(self, Direction::IN | Direction::BOTH)
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::OUT => Direction::IN,
            Direction::IN => Direction::OUT,
            Direction::BOTH => Direction::BOTH,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid direction '{0}', direction must be one of {{ 'out', 'in', 'both' }}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "out" => Ok(Direction::OUT),
            "in" => Ok(Direction::IN),
            "both" | "all" => Ok(Direction::BOTH),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dir_str = match self {
            Direction::OUT => "out",
            Direction::IN => "in",
            Direction::BOTH => "both",
        };
        write!(f, "{}", dir_str)
    }
}
