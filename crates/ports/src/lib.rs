//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory listing and file length lookups consumed by the walkers
//!
//! Keeping the filesystem behind a trait lets the engine run against the real
//! disk, or against an in-memory tree with injected failures.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;

pub use filesystem::{FileSystem, Listing};
