//! Listing and failure policy shared by both walkers.

use std::path::{Path, PathBuf};

use dirtally_ports::filesystem::{FileSystem, Listing};
use dirtally_shared_kernel::FsError;

use crate::error::{EngineError, Result};

/// Immediate children of one directory.
pub(super) struct Children {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Lists both kinds of children of `dir`. Either listing failing fails the node.
pub(super) fn list_children<F: FileSystem>(fs: &F, dir: &Path) -> Listing<Children> {
    let dirs = fs.list_subdirectories(dir)?;
    let files = fs.list_files(dir)?;
    Ok(Children { dirs, files })
}

/// Lists the walk root; failure here means the walk cannot start.
pub(super) fn list_root<F: FileSystem>(fs: &F, root: &Path) -> Result<Children> {
    list_children(fs, root).map_err(|source| EngineError::RootUnavailable {
        path: root.to_path_buf(),
        source,
    })
}

/// Records a failure below the root. The caller drops the entry's contribution.
pub(super) fn degrade(err: &FsError) {
    if err.is_access_denied() {
        log::debug!("skipping {}: {err}", err.path.display());
    } else {
        log::warn!("skipping {}: {err}", err.path.display());
    }
}
