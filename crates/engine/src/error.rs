use std::path::PathBuf;

use dirtally_shared_kernel::FsError;
use thiserror::Error;

use crate::config::ConfigBuilderError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The walk root itself could not be listed; no totals were produced.
    #[error("Cannot walk '{path}': {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigBuilderError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
