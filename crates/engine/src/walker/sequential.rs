use std::path::Path;

use dirtally_ports::filesystem::FileSystem;

use super::policy::{self, Children};
use super::{WalkOutcome, Walker};
use crate::error::Result;
use crate::options::Strategy;

/// Single-threaded depth-first walker.
///
/// Files of a directory are measured in enumeration order, then each
/// subdirectory is walked to completion before its next sibling.
#[derive(Debug, Clone)]
pub struct SequentialWalker<F> {
    fs: F,
}

impl<F: FileSystem> SequentialWalker<F> {
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    fn walk_dir(&self, children: Children, acc: &mut WalkOutcome) {
        for file in &children.files {
            match self.fs.file_byte_length(file) {
                Ok(len) => acc.result.record_file(len),
                Err(err) => {
                    policy::degrade(&err);
                    acc.skipped += 1;
                }
            }
        }

        for dir in &children.dirs {
            match policy::list_children(&self.fs, dir) {
                Ok(grandchildren) => {
                    acc.result.record_folder();
                    self.walk_dir(grandchildren, acc);
                }
                Err(err) => {
                    policy::degrade(&err);
                    acc.skipped += 1;
                }
            }
        }
    }
}

impl<F: FileSystem> Walker for SequentialWalker<F> {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    fn walk(&self, root: &Path) -> Result<WalkOutcome> {
        let children = policy::list_root(&self.fs, root)?;
        let mut acc = WalkOutcome::default();
        self.walk_dir(children, &mut acc);
        Ok(acc)
    }
}
