// crates/shared-kernel/src/error.rs
use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a filesystem failure.
///
/// Walkers only branch on this; the full `io::Error` stays available as the
/// error source for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The caller lacks permission to list or read the entry.
    AccessDenied,
    /// The entry vanished (or never existed).
    NotFound,
    /// Any other I/O failure: not a directory, name too long, device errors, ...
    Other,
}

impl From<io::ErrorKind> for FailureKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::PermissionDenied => Self::AccessDenied,
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Other,
        }
    }
}

impl FailureKind {
    fn io_kind(self) -> io::ErrorKind {
        match self {
            Self::AccessDenied => io::ErrorKind::PermissionDenied,
            Self::NotFound => io::ErrorKind::NotFound,
            Self::Other => io::ErrorKind::Other,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AccessDenied => "access denied",
            Self::NotFound => "not found",
            Self::Other => "i/o failure",
        };
        f.write_str(label)
    }
}

/// Filesystem call that produced an [`FsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListSubdirectories,
    ListFiles,
    FileByteLength,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ListSubdirectories => "listing subdirectories",
            Self::ListFiles => "listing files",
            Self::FileByteLength => "reading file length",
        };
        f.write_str(label)
    }
}

/// Failure raised by a filesystem collaborator.
#[derive(Debug, Error)]
#[error("{operation} failed on '{path}': {source}")]
pub struct FsError {
    pub operation: Operation,
    pub path: PathBuf,
    pub kind: FailureKind,
    #[source]
    pub source: io::Error,
}

impl FsError {
    /// Wraps an `io::Error`, classifying it by its `ErrorKind`.
    pub fn from_io(operation: Operation, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            operation,
            path: path.into(),
            kind: FailureKind::from(source.kind()),
            source,
        }
    }

    /// Builds an error of the given kind without an underlying OS error.
    pub fn synthetic(operation: Operation, path: impl Into<PathBuf>, kind: FailureKind) -> Self {
        Self {
            operation,
            path: path.into(),
            kind,
            source: io::Error::from(kind.io_kind()),
        }
    }

    pub fn is_access_denied(&self) -> bool {
        self.kind == FailureKind::AccessDenied
    }
}

pub type FsResult<T> = std::result::Result<T, FsError>;
