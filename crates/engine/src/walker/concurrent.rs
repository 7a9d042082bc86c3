use std::path::Path;

use dirtally_ports::filesystem::FileSystem;
use rayon::prelude::*;

use super::policy::{self, Children};
use super::{WalkOutcome, Walker};
use crate::error::Result;
use crate::options::Strategy;

/// Fork-join walker running on rayon's work-stealing pool.
///
/// For every directory, the length lookups of its files and the descents into
/// its subdirectories are independent units of work. Each unit returns its own
/// totals and the directory sums them once every unit has joined, so no
/// counter is ever shared between threads and no unit outlives the call that
/// spawned it.
#[derive(Debug, Clone)]
pub struct ConcurrentWalker<F> {
    fs: F,
}

impl<F: FileSystem> ConcurrentWalker<F> {
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    fn walk_dir(&self, children: Children) -> WalkOutcome {
        let Children { dirs, files } = children;
        let (from_files, from_dirs) = rayon::join(
            || {
                files
                    .par_iter()
                    .map(|file| self.measure(file))
                    .sum::<WalkOutcome>()
            },
            || {
                dirs.par_iter()
                    .map(|dir| self.descend(dir))
                    .sum::<WalkOutcome>()
            },
        );
        from_files + from_dirs
    }

    fn measure(&self, file: &Path) -> WalkOutcome {
        match self.fs.file_byte_length(file) {
            Ok(len) => WalkOutcome::file(len),
            Err(err) => {
                policy::degrade(&err);
                WalkOutcome::skipped_one()
            }
        }
    }

    fn descend(&self, dir: &Path) -> WalkOutcome {
        match policy::list_children(&self.fs, dir) {
            Ok(children) => {
                let mut outcome = self.walk_dir(children);
                outcome.result.record_folder();
                outcome
            }
            Err(err) => {
                policy::degrade(&err);
                WalkOutcome::skipped_one()
            }
        }
    }
}

impl<F: FileSystem> Walker for ConcurrentWalker<F> {
    fn strategy(&self) -> Strategy {
        Strategy::Parallel
    }

    fn walk(&self, root: &Path) -> Result<WalkOutcome> {
        let children = policy::list_root(&self.fs, root)?;
        Ok(self.walk_dir(children))
    }
}
