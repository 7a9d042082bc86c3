//! Directory-tree walkers.
//!
//! Both walkers implement the same contract: given a root directory, count
//! every subdirectory and file beneath it and sum the file lengths. They
//! differ only in scheduling, so their totals over an unchanging tree are
//! identical.

mod concurrent;
mod policy;
mod sequential;

use std::iter::Sum;
use std::ops::Add;
use std::path::Path;

use dirtally_shared_kernel::WalkResult;

pub use concurrent::ConcurrentWalker;
pub use sequential::SequentialWalker;

use crate::error::Result;
use crate::options::Strategy;

/// Totals of a finished walk plus the number of entries it had to skip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    pub result: WalkResult,
    /// Directories and files whose filesystem call failed below the root.
    /// Their contribution is absent from `result`.
    pub skipped: u64,
}

impl WalkOutcome {
    pub(crate) const fn skipped_one() -> Self {
        Self {
            result: WalkResult::EMPTY,
            skipped: 1,
        }
    }

    pub(crate) fn file(len: u64) -> Self {
        let mut outcome = Self::default();
        outcome.result.record_file(len);
        outcome
    }
}

impl Add for WalkOutcome {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            result: self.result + rhs.result,
            skipped: self.skipped.saturating_add(rhs.skipped),
        }
    }
}

impl Sum for WalkOutcome {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// A strategy for walking a directory tree to completion.
pub trait Walker: Send + Sync {
    fn strategy(&self) -> Strategy;

    /// Walks the tree under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RootUnavailable`](crate::error::EngineError::RootUnavailable)
    /// when `root` itself cannot be listed. Failures below the root never
    /// abort the walk; they are counted in [`WalkOutcome::skipped`].
    fn walk(&self, root: &Path) -> Result<WalkOutcome>;

    /// Walks the tree under `root` and returns only the totals.
    ///
    /// # Errors
    ///
    /// Same as [`Walker::walk`].
    fn run(&self, root: &Path) -> Result<WalkResult> {
        self.walk(root).map(|outcome| outcome.result)
    }
}
