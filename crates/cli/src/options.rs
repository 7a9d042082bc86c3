use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

/// Walker selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum Mode {
    /// Single-threaded depth-first walk
    Sequential,
    /// Fork-join walk across all cores
    Parallel,
    /// Parallel walk, then sequential walk, over the same root
    Both,
}
