// crates/infra/src/memory.rs
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dirtally_ports::filesystem::{FileSystem, Listing};
use dirtally_shared_kernel::{FailureKind, FsError, Operation};

#[derive(Debug, Clone)]
enum Node {
    Dir { children: Vec<PathBuf> },
    File { len: u64 },
}

/// In-memory directory tree with injectable failures.
///
/// Children are listed in insertion order. A fault registered on a path makes
/// every call *on* that path fail (listing it, or reading its length) while
/// its parent still lists it, which is how permission errors and deletions
/// between enumeration and lookup look to a walker.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    nodes: HashMap<PathBuf, Node>,
    faults: HashMap<PathBuf, FailureKind>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory, creating missing ancestors.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.ensure_dir(path.as_ref());
        self
    }

    /// Adds a file of `len` bytes, creating missing ancestors.
    ///
    /// Re-adding an existing file only updates its length.
    pub fn add_file(&mut self, path: impl AsRef<Path>, len: u64) -> &mut Self {
        let path = path.as_ref();
        match self.nodes.get_mut(path) {
            Some(Node::File { len: existing }) => {
                *existing = len;
                return self;
            }
            Some(Node::Dir { .. }) => {
                self.remove(path);
            }
            None => {}
        }
        self.link_to_parent(path);
        self.nodes.insert(path.to_path_buf(), Node::File { len });
        self
    }

    /// Makes every call on `path` fail with an access-denied error.
    pub fn deny(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.fail(path, FailureKind::AccessDenied)
    }

    /// Makes every call on `path` fail with the given kind.
    pub fn fail(&mut self, path: impl AsRef<Path>, kind: FailureKind) -> &mut Self {
        self.faults.insert(path.as_ref().to_path_buf(), kind);
        self
    }

    /// Removes `path` and everything beneath it.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        if let Some(parent) = parent_of(path)
            && let Some(Node::Dir { children }) = self.nodes.get_mut(parent)
        {
            children.retain(|c| c != path);
        }
        self.nodes.retain(|p, _| !p.starts_with(path));
        self
    }

    fn ensure_dir(&mut self, path: &Path) {
        match self.nodes.get(path).map(|n| matches!(n, Node::Dir { .. })) {
            Some(true) => return,
            Some(false) => {
                self.remove(path);
            }
            None => {}
        }
        self.link_to_parent(path);
        self.nodes
            .insert(path.to_path_buf(), Node::Dir { children: Vec::new() });
    }

    fn link_to_parent(&mut self, path: &Path) {
        let Some(parent) = parent_of(path) else {
            return;
        };
        self.ensure_dir(parent);
        if let Some(Node::Dir { children }) = self.nodes.get_mut(parent)
            && !children.iter().any(|c| c == path)
        {
            children.push(path.to_path_buf());
        }
    }

    fn check(&self, operation: Operation, path: &Path) -> Listing<()> {
        match self.faults.get(path) {
            Some(kind) => Err(FsError::synthetic(operation, path, *kind)),
            None => Ok(()),
        }
    }

    fn children_of(&self, operation: Operation, dir: &Path) -> Listing<&[PathBuf]> {
        self.check(operation, dir)?;
        match self.nodes.get(dir) {
            Some(Node::Dir { children }) => Ok(children.as_slice()),
            Some(Node::File { .. }) => Err(FsError::synthetic(operation, dir, FailureKind::Other)),
            None => Err(FsError::synthetic(operation, dir, FailureKind::NotFound)),
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.get(path), Some(Node::Dir { .. }))
    }
}

fn parent_of(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

impl FileSystem for MemoryFileSystem {
    fn list_subdirectories(&self, dir: &Path) -> Listing<Vec<PathBuf>> {
        let children = self.children_of(Operation::ListSubdirectories, dir)?;
        Ok(children.iter().filter(|c| self.is_dir(c)).cloned().collect())
    }

    fn list_files(&self, dir: &Path) -> Listing<Vec<PathBuf>> {
        let children = self.children_of(Operation::ListFiles, dir)?;
        Ok(children.iter().filter(|c| !self.is_dir(c)).cloned().collect())
    }

    fn file_byte_length(&self, file: &Path) -> Listing<u64> {
        self.check(Operation::FileByteLength, file)?;
        match self.nodes.get(file) {
            Some(Node::File { len }) => Ok(*len),
            Some(Node::Dir { .. }) => Err(FsError::synthetic(
                Operation::FileByteLength,
                file,
                FailureKind::Other,
            )),
            None => Err(FsError::synthetic(
                Operation::FileByteLength,
                file,
                FailureKind::NotFound,
            )),
        }
    }
}
