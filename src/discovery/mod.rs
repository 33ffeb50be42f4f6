//! Test source discovery.
//!
//! The tests root holds one directory per test target, and each target holds
//! its `*Tests.swift` files directly. Nothing deeper is visited.

pub mod utils;

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{IoError, Result};
use crate::scanner::{self, TestClass};

/// A test source file that declared at least one test class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub classes: Vec<TestClass>,
}

/// A test target directory directly under the tests root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDirectory {
    pub name: String,
    pub path: PathBuf,
    pub files: Vec<SourceFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTree {
    pub root: PathBuf,
    /// Sorted by name. Only directories with at least one test class.
    pub directories: Vec<TestDirectory>,
    /// Candidate files parsed, including ones without test classes.
    pub files_scanned: usize,
}

impl TestTree {
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    pub fn source_files(&self) -> impl Iterator<Item = &SourceFile> {
        self.directories.iter().flat_map(|d| d.files.iter())
    }

    pub fn classes(&self) -> impl Iterator<Item = &TestClass> {
        self.source_files().flat_map(|f| f.classes.iter())
    }

    pub fn directory_names(&self) -> Vec<&str> {
        self.directories.iter().map(|d| d.name.as_str()).collect()
    }
}

/// Walks `root` and parses every candidate test file.
pub fn scan(root: &Path) -> Result<TestTree> {
    if !root.is_dir() {
        return Err(IoError::directory_not_found(root).into());
    }

    let mut directories = Vec::new();
    let mut files_scanned = 0;

    for entry in utils::child_directories(root)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let mut files = Vec::new();

        for path in utils::test_source_files(entry.path())? {
            files_scanned += 1;
            let classes = scanner::parse_file(&path)?;
            if classes.is_empty() {
                debug!("No test classes in {}", path.display());
                continue;
            }
            files.push(SourceFile { path, classes });
        }

        if files.is_empty() {
            debug!(directory = %name, "skipping directory without test classes");
            continue;
        }

        directories.push(TestDirectory {
            name,
            path: entry.into_path(),
            files,
        });
    }

    Ok(TestTree {
        root: root.to_path_buf(),
        directories,
        files_scanned,
    })
}
