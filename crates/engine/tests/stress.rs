mod common;

use std::path::Path;

use dirtally_engine::walker::{ConcurrentWalker, SequentialWalker, Walker};

#[test]
fn concurrent_walker_never_loses_or_duplicates_updates() {
    // 3-way fanout, 4 levels below the root: 120 directories, 968 files.
    let (fs, expected) = common::synthetic_tree("stress", 3, 4, 8);
    assert_eq!(expected.folders.value(), 120);
    assert_eq!(expected.files.value(), 968);

    let reference = SequentialWalker::new(&fs).run(Path::new("stress")).unwrap();
    assert_eq!(reference, expected);

    let walker = ConcurrentWalker::new(&fs);
    for iteration in 0..200 {
        let result = walker.run(Path::new("stress")).unwrap();
        assert_eq!(result, reference, "iteration {iteration}");
    }
}

#[test]
fn wide_flat_directory() {
    let (fs, expected) = common::synthetic_tree("wide", 0, 0, 5_000);
    let result = ConcurrentWalker::new(&fs).run(Path::new("wide")).unwrap();
    assert_eq!(result, expected);
    assert_eq!(result.bytes.value(), 5_000 * 5_001 / 2);
}

#[test]
fn deep_narrow_chain() {
    let (fs, expected) = common::synthetic_tree("deep", 1, 64, 1);
    assert_eq!(expected.folders.value(), 64);

    let seq = SequentialWalker::new(&fs).run(Path::new("deep")).unwrap();
    let par = ConcurrentWalker::new(&fs).run(Path::new("deep")).unwrap();
    assert_eq!(seq, expected);
    assert_eq!(par, expected);
}
