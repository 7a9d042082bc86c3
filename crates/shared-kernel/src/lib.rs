// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{FailureKind, FsError, FsResult, Operation};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteCount, FileCount, FolderCount, WalkResult};
