#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub fn get_test_fixture_path(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(fixture_name)
}

/// Copies a fixture into a fresh temp dir so generated files never land in
/// the source tree.
pub fn copy_fixture(fixture_name: &str) -> TempDir {
    let source = get_test_fixture_path(fixture_name);
    let temp_dir = TempDir::new().unwrap();

    for entry in WalkDir::new(&source).min_depth(1) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(&source).unwrap();
        let target = temp_dir.path().join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }

    temp_dir
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read: {}", path.display()))
}
