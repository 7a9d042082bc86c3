// crates/infra/src/filesystem.rs
use std::fs::{self, DirEntry, FileType};
use std::path::{Path, PathBuf};

use dirtally_ports::filesystem::{FileSystem, Listing};
use dirtally_shared_kernel::{FsError, Operation};

/// [`FileSystem`] backed by `std::fs`.
///
/// Entry types come from the directory entry itself, so symbolic links are
/// never followed: a link to a directory is listed as a file and is never
/// descended. This keeps link cycles out of every walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub const fn new() -> Self {
        Self
    }

    /// Reads `dir` once and keeps the entries whose type satisfies `keep`.
    ///
    /// The directory handle is dropped before returning.
    fn list_where(
        dir: &Path,
        operation: Operation,
        keep: impl Fn(&FileType) -> bool,
    ) -> Listing<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| FsError::from_io(operation, dir, e))?;

        let mut out = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(operation, dir, e))?;
            if let Some(ft) = entry_type(&entry)
                && keep(&ft)
            {
                out.push(entry.path());
            }
        }
        Ok(out)
    }
}

// A single entry whose type cannot be determined is skipped; the rest of the
// listing stays valid.
fn entry_type(entry: &DirEntry) -> Option<FileType> {
    match entry.file_type() {
        Ok(ft) => Some(ft),
        Err(err) => {
            log::debug!("skipping {}: {err}", entry.path().display());
            None
        }
    }
}

impl FileSystem for StdFileSystem {
    fn list_subdirectories(&self, dir: &Path) -> Listing<Vec<PathBuf>> {
        Self::list_where(dir, Operation::ListSubdirectories, FileType::is_dir)
    }

    fn list_files(&self, dir: &Path) -> Listing<Vec<PathBuf>> {
        Self::list_where(dir, Operation::ListFiles, |ft| !ft.is_dir())
    }

    fn file_byte_length(&self, file: &Path) -> Listing<u64> {
        fs::symlink_metadata(file)
            .map(|meta| meta.len())
            .map_err(|e| FsError::from_io(Operation::FileByteLength, file, e))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use dirtally_shared_kernel::FailureKind;
    use tempfile::tempdir;

    use super::*;

    fn names(paths: Vec<PathBuf>) -> BTreeSet<String> {
        paths
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect()
    }

    #[test]
    fn splits_directories_from_files() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        fs::write(dir.path().join("b.bin"), [0u8; 3]).unwrap();

        let fs_ = StdFileSystem::new();
        let dirs = fs_.list_subdirectories(dir.path()).unwrap();
        let files = fs_.list_files(dir.path()).unwrap();

        assert_eq!(names(dirs), BTreeSet::from(["sub".to_string()]));
        assert_eq!(
            names(files),
            BTreeSet::from(["a.txt".to_string(), "b.bin".to_string()])
        );
    }

    #[test]
    fn listing_is_not_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), b"x").unwrap();

        let fs_ = StdFileSystem::new();
        assert_eq!(fs_.list_subdirectories(dir.path()).unwrap().len(), 1);
        assert!(fs_.list_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn byte_length_matches_written_size() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, vec![7u8; 4096]).unwrap();

        assert_eq!(StdFileSystem::new().file_byte_length(&file).unwrap(), 4096);
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = StdFileSystem::new().list_files(&missing).unwrap_err();
        assert_eq!(err.kind, FailureKind::NotFound);
        assert_eq!(err.operation, Operation::ListFiles);
        assert_eq!(err.path, missing);
    }

    #[test]
    fn listing_a_regular_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, b"data").unwrap();

        let err = StdFileSystem::new().list_subdirectories(&file).unwrap_err();
        assert_eq!(err.operation, Operation::ListSubdirectories);
        assert_ne!(err.kind, FailureKind::AccessDenied);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_listed_as_a_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let fs_ = StdFileSystem::new();
        assert_eq!(
            names(fs_.list_subdirectories(dir.path()).unwrap()),
            BTreeSet::from(["real".to_string()])
        );
        assert_eq!(
            names(fs_.list_files(dir.path()).unwrap()),
            BTreeSet::from(["link".to_string()])
        );
    }
}
