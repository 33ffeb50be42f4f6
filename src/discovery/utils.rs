use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::IoError;

/// File name suffixes that mark a Swift test source.
pub const TEST_FILE_SUFFIXES: &[&str] = &["Test.swift", "Tests.swift"];

/// Immediate children of `dir` accepted by `keep`, in file-name order.
///
/// Symlinks are followed so a linked directory or file counts as what it
/// points to. Dangling links are neither and are skipped.
pub fn child_entries<F>(dir: &Path, keep: F) -> Result<Vec<DirEntry>, IoError>
where
    F: Fn(&DirEntry) -> bool,
{
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_link(&e) => {
                debug!("Skipping dangling symlink: {}", e.path().unwrap_or(dir).display());
                continue;
            }
            Err(e) => return Err(IoError::directory_scan_error(dir, e)),
        };
        if keep(&entry) {
            entries.push(entry);
        }
    }

    Ok(entries)
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .is_some_and(|io| io.kind() == ErrorKind::NotFound);
    not_found
        && err
            .path()
            .and_then(|p| fs::symlink_metadata(p).ok())
            .is_some_and(|m| m.file_type().is_symlink())
}

pub fn child_directories(dir: &Path) -> Result<Vec<DirEntry>, IoError> {
    child_entries(dir, |e| e.file_type().is_dir())
}

pub fn test_source_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    Ok(child_entries(dir, |e| {
        e.file_type().is_file() && is_test_source(&e.file_name().to_string_lossy())
    })?
    .into_iter()
    .map(DirEntry::into_path)
    .collect())
}

/// Case-sensitive `*Test.swift` / `*Tests.swift` check.
pub fn is_test_source(file_name: &str) -> bool {
    TEST_FILE_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}
