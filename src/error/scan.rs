use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// A `func test...()` matched before any `XCTestCase` subclass was opened.
    #[error("{path}:{line}: test function '{function}' appears before any XCTestCase class")]
    OrphanTestFunction {
        path: PathBuf,
        line: usize,
        function: String,
    },
}

impl ScanError {
    pub fn orphan_test_function(
        path: impl Into<PathBuf>,
        line: usize,
        function: impl Into<String>,
    ) -> Self {
        Self::OrphanTestFunction {
            path: path.into(),
            line,
            function: function.into(),
        }
    }
}
