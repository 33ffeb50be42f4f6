use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::discovery;
use crate::error::Result;
use crate::output;

/// What one generation run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub files_scanned: usize,
    pub extension_files: Vec<PathBuf>,
    pub test_classes: usize,
    pub test_functions: usize,
    /// `None` when no test class was found anywhere.
    pub linux_main: Option<PathBuf>,
}

/// Scans `tests_dir` and rewrites every generated file beneath it.
///
/// Each run is a full rebuild. Stops at the first error, leaving whatever
/// was already written in place.
pub fn generate(tests_dir: &Path) -> Result<GenerationSummary> {
    let tree = discovery::scan(tests_dir)?;
    let mut summary = GenerationSummary {
        files_scanned: tree.files_scanned,
        ..Default::default()
    };

    for file in tree.source_files() {
        let written = output::write_class_extension(&file.path, &file.classes)?;
        summary.extension_files.push(written);
    }

    let class_names: Vec<&str> = tree.classes().map(|c| c.name.as_str()).collect();
    summary.test_classes = class_names.len();
    summary.test_functions = tree.classes().map(|c| c.functions.len()).sum();

    if class_names.is_empty() {
        info!(
            "No test classes found under {}, skipping {}",
            tests_dir.display(),
            output::LINUX_MAIN_FILE
        );
        return Ok(summary);
    }

    let linux_main = output::write_linux_main(tests_dir, &tree.directory_names(), &class_names)?;
    summary.linux_main = Some(linux_main);

    debug!(
        files_scanned = summary.files_scanned,
        extension_files = summary.extension_files.len(),
        test_classes = summary.test_classes,
        test_functions = summary.test_functions,
        "generation complete"
    );

    Ok(summary)
}
