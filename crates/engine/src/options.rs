use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A walker implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Sequential,
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        })
    }
}

/// Which walker(s) a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sequential,
    Parallel,
    /// Parallel first, then sequential, over the same root.
    #[default]
    Both,
}

impl Mode {
    /// Walkers to run, in execution order.
    pub const fn strategies(self) -> &'static [Strategy] {
        match self {
            Self::Sequential => &[Strategy::Sequential],
            Self::Parallel => &[Strategy::Parallel],
            Self::Both => &[Strategy::Parallel, Strategy::Sequential],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::Both => "both",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            "both" => Ok(Self::Both),
            other => Err(format!("Unknown mode: {other}")),
        }
    }
}
