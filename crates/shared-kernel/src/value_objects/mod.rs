// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod walk_result;

pub use counts::{ByteCount, FileCount, FolderCount};
pub use walk_result::WalkResult;
