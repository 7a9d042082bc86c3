// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dirtally_shared_kernel::FsError;

/// Outcome of a single collaborator call.
pub type Listing<T> = Result<T, FsError>;

/// Port for the filesystem primitives a walk needs.
///
/// Implementations acquire and release any OS handle within a single call;
/// nothing is cached between calls, so results reflect the tree as it is at
/// the moment of the call and may race with concurrent mutation.
pub trait FileSystem: Send + Sync {
    /// Immediate subdirectories of `dir`, in enumeration order.
    fn list_subdirectories(&self, dir: &Path) -> Listing<Vec<PathBuf>>;

    /// Immediate non-directory entries of `dir`, in enumeration order.
    fn list_files(&self, dir: &Path) -> Listing<Vec<PathBuf>>;

    /// Size in bytes of the entry at `file`.
    fn file_byte_length(&self, file: &Path) -> Listing<u64>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn list_subdirectories(&self, dir: &Path) -> Listing<Vec<PathBuf>> {
        (**self).list_subdirectories(dir)
    }

    fn list_files(&self, dir: &Path) -> Listing<Vec<PathBuf>> {
        (**self).list_files(dir)
    }

    fn file_byte_length(&self, file: &Path) -> Listing<u64> {
        (**self).file_byte_length(file)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn list_subdirectories(&self, dir: &Path) -> Listing<Vec<PathBuf>> {
        (**self).list_subdirectories(dir)
    }

    fn list_files(&self, dir: &Path) -> Listing<Vec<PathBuf>> {
        (**self).list_files(dir)
    }

    fn file_byte_length(&self, file: &Path) -> Listing<u64> {
        (**self).file_byte_length(file)
    }
}
