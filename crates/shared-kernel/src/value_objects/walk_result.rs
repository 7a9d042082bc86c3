// crates/shared-kernel/src/value_objects/walk_result.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::counts::{ByteCount, FileCount, FolderCount};

/// Aggregated totals of a single walk: subdirectories, files and bytes.
///
/// Component-wise addition is commutative and associative, which lets the
/// concurrent walker merge per-branch totals in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalkResult {
    pub folders: FolderCount,
    pub files: FileCount,
    pub bytes: ByteCount,
}

impl WalkResult {
    pub const EMPTY: Self = Self {
        folders: FolderCount::ZERO,
        files: FileCount::ZERO,
        bytes: ByteCount::ZERO,
    };

    pub fn new(folders: u64, files: u64, bytes: u64) -> Self {
        Self {
            folders: FolderCount::new(folders),
            files: FileCount::new(files),
            bytes: ByteCount::new(bytes),
        }
    }

    /// Credits one discovered subdirectory.
    #[inline]
    pub fn record_folder(&mut self) {
        self.folders += 1u64;
    }

    /// Credits one file of `len` bytes.
    #[inline]
    pub fn record_file(&mut self, len: u64) {
        self.files += 1u64;
        self.bytes += len;
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_zero() && self.files.is_zero() && self.bytes.is_zero()
    }
}

impl Add for WalkResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            folders: self.folders + rhs.folders,
            files: self.files + rhs.files,
            bytes: self.bytes + rhs.bytes,
        }
    }
}

impl AddAssign for WalkResult {
    fn add_assign(&mut self, rhs: Self) {
        self.folders += rhs.folders;
        self.files += rhs.files;
        self.bytes += rhs.bytes;
    }
}

impl Sum for WalkResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::EMPTY, Add::add)
    }
}

impl std::fmt::Display for WalkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} folders, {} files, {} bytes",
            self.folders, self.files, self.bytes
        )
    }
}
