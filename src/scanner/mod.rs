mod guard;
pub mod patterns;

use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};

use crate::error::{IoError, Result, ScanError};
pub use guard::GuardState;
use patterns::Declaration;

/// An `XCTestCase` subclass and its zero-argument `test*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestClass {
    pub name: String,
    /// Discovery order, never sorted.
    pub functions: Vec<String>,
}

impl TestClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }
}

/// Reads `path` and extracts its test classes.
pub fn parse_file(path: &Path) -> Result<Vec<TestClass>> {
    info!("Parsing file: {}", path.display());
    let bytes = fs::read(path).map_err(|e| IoError::read_error(path, e))?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(parse_source(path, &source)?)
}

/// Line scan over Swift source text.
///
/// `path` is only used for diagnostics. Classes that end up without any
/// test function are dropped from the result.
pub fn parse_source(path: &Path, source: &str) -> std::result::Result<Vec<TestClass>, ScanError> {
    let mut classes: Vec<TestClass> = Vec::new();
    let mut guard = GuardState::default();

    for (index, line) in source.lines().enumerate() {
        guard = guard.advance(line);
        if guard.suppresses() {
            trace!(line = index + 1, "skipping non-Linux branch");
            continue;
        }

        match patterns::match_declaration(line) {
            Some(Declaration::Class(name)) => {
                debug!(class = name, "found test class");
                classes.push(TestClass::new(name));
            }
            Some(Declaration::Function(name)) => {
                let current = classes
                    .last_mut()
                    .ok_or_else(|| ScanError::orphan_test_function(path, index + 1, name))?;
                trace!(class = %current.name, function = name, "found test function");
                current.functions.push(name.to_string());
            }
            None => {}
        }
    }

    classes.retain(|class| {
        if class.functions.is_empty() {
            debug!(class = %class.name, "dropping class without test functions");
        }
        !class.functions.is_empty()
    });

    Ok(classes)
}
