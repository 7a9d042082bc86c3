mod common;

use std::path::Path;

use dirtally_engine::error::EngineError;
use dirtally_engine::walker::{ConcurrentWalker, SequentialWalker, Walker};
use dirtally_infra::MemoryFileSystem;
use dirtally_shared_kernel::{FailureKind, WalkResult};

fn tree() -> MemoryFileSystem {
    let mut fs = MemoryFileSystem::new();
    fs.add_file("root/top.txt", 7)
        .add_file("root/public/a", 10)
        .add_file("root/public/nested/b", 20)
        .add_file("root/private/secret", 1_000)
        .add_file("root/private/deeper/more", 2_000)
        .add_dir("root/private/deeper/empty")
        .add_dir("root/empty");
    fs
}

fn both(fs: &MemoryFileSystem) -> [Box<dyn Walker + '_>; 2] {
    [
        Box::new(SequentialWalker::new(fs)),
        Box::new(ConcurrentWalker::new(fs)),
    ]
}

#[test]
fn denied_subtree_is_subtracted_exactly() {
    let full_fs = tree();
    let full = SequentialWalker::new(&full_fs).run(Path::new("root")).unwrap();
    assert_eq!(full, WalkResult::new(6, 5, 3_037));

    let mut denied_fs = tree();
    denied_fs.deny("root/private");

    // private itself, deeper, deeper/empty; secret and more.
    let private_contribution = WalkResult::new(3, 2, 3_000);
    let expected = WalkResult::new(
        full.folders.value() - private_contribution.folders.value(),
        full.files.value() - private_contribution.files.value(),
        full.bytes.value() - private_contribution.bytes.value(),
    );

    for walker in both(&denied_fs) {
        let outcome = walker.walk(Path::new("root")).unwrap();
        assert_eq!(outcome.result, expected, "{}", walker.strategy());
        assert_eq!(outcome.skipped, 1);
    }
}

#[test]
fn denial_deep_in_the_tree_keeps_ancestors_and_siblings() {
    let mut fs = tree();
    fs.deny("root/private/deeper");

    for walker in both(&fs) {
        let result = walker.run(Path::new("root")).unwrap();
        assert_eq!(result, WalkResult::new(4, 4, 1_037), "{}", walker.strategy());
    }
}

#[test]
fn several_denials_are_all_contained() {
    let mut fs = tree();
    fs.deny("root/private").deny("root/public/nested").deny("root/empty");

    for walker in both(&fs) {
        let outcome = walker.walk(Path::new("root")).unwrap();
        assert_eq!(outcome.result, WalkResult::new(1, 2, 17));
        assert_eq!(outcome.skipped, 3);
    }
}

#[test]
fn non_permission_failures_are_contained_the_same_way() {
    let mut fs = tree();
    fs.fail("root/private", FailureKind::NotFound)
        .fail("root/public/nested", FailureKind::Other);

    for walker in both(&fs) {
        let outcome = walker.walk(Path::new("root")).unwrap();
        assert_eq!(outcome.result, WalkResult::new(2, 2, 17));
        assert_eq!(outcome.skipped, 2);
    }
}

#[test]
fn file_vanishing_after_listing_is_not_counted() {
    let mut fs = tree();
    fs.fail("root/public/a", FailureKind::NotFound);

    for walker in both(&fs) {
        let outcome = walker.walk(Path::new("root")).unwrap();
        assert_eq!(outcome.result, WalkResult::new(6, 4, 3_027));
        assert_eq!(outcome.skipped, 1);
    }
}

#[test]
fn denied_root_cannot_start() {
    let mut fs = tree();
    fs.deny("root");

    for walker in both(&fs) {
        match walker.walk(Path::new("root")) {
            Err(EngineError::RootUnavailable { source, .. }) => assert!(source.is_access_denied()),
            other => panic!("expected RootUnavailable, got {other:?}"),
        }
    }
}
