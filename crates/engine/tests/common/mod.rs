#![allow(dead_code)]

use std::fs;
use std::path::Path;

use dirtally_infra::MemoryFileSystem;
use dirtally_shared_kernel::WalkResult;

/// root/A/{10,20,30 bytes}, root/B/C (empty): 3 folders, 3 files, 60 bytes.
pub fn write_scenario(root: &Path) {
    fs::create_dir_all(root.join("A")).unwrap();
    fs::create_dir_all(root.join("B").join("C")).unwrap();
    fs::write(root.join("A").join("ten"), vec![b'a'; 10]).unwrap();
    fs::write(root.join("A").join("twenty"), vec![b'b'; 20]).unwrap();
    fs::write(root.join("A").join("thirty"), vec![b'c'; 30]).unwrap();
}

pub fn scenario_totals() -> WalkResult {
    WalkResult::new(3, 3, 60)
}

/// Synthetic tree: `fanout` subdirectories per level, `depth` levels, and
/// `files_per_dir` files in every directory (root included). File `i` of a
/// directory is `i + 1` bytes long.
pub fn synthetic_tree(root: &str, fanout: usize, depth: usize, files_per_dir: usize) -> (MemoryFileSystem, WalkResult) {
    let mut fs = MemoryFileSystem::new();
    fs.add_dir(root);
    let mut expected = WalkResult::default();
    grow(&mut fs, Path::new(root), fanout, depth, files_per_dir, &mut expected);
    (fs, expected)
}

fn grow(
    fs: &mut MemoryFileSystem,
    dir: &Path,
    fanout: usize,
    depth: usize,
    files_per_dir: usize,
    expected: &mut WalkResult,
) {
    for i in 0..files_per_dir {
        let len = i as u64 + 1;
        fs.add_file(dir.join(format!("f{i}")), len);
        expected.record_file(len);
    }
    if depth == 0 {
        return;
    }
    for i in 0..fanout {
        let sub = dir.join(format!("d{i}"));
        fs.add_dir(&sub);
        expected.record_folder();
        grow(fs, &sub, fanout, depth - 1, files_per_dir, expected);
    }
}
