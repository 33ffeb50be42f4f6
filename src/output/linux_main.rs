use std::path::{Path, PathBuf};

use super::{file_header, write_generated, DEPRECATION_ANNOTATION};
use crate::error::Result;

pub const LINUX_MAIN_FILE: &str = "LinuxMain.swift";

const PLATFORM_GUARD: &str = "#if os(Linux) || os(FreeBSD) || os(Android)";

// Calling `run` through the protocol existential keeps the compiler from
// warning about the deprecated `allTests` accessors.
const RUNNER_SHIM: &str = "\
// This protocol is necessary so we can call the 'run' method (on an existential of this protocol)
// without the compiler noticing that we're calling a deprecated function.
// This hack exists so we can deprecate individual tests which test deprecated functionality without
// getting a compiler warning...
protocol LinuxMainRunner { func run() }

class LinuxMainRunnerImpl: LinuxMainRunner {
";

pub fn linux_main_path(tests_root: &Path) -> PathBuf {
    tests_root.join(LINUX_MAIN_FILE)
}

/// Renders `LinuxMain.swift`. Imports and test cases are sorted here.
pub fn render_linux_main(directories: &[&str], classes: &[&str]) -> String {
    let mut imports = directories.to_vec();
    imports.sort_unstable();
    let mut test_cases = classes.to_vec();
    test_cases.sort_unstable();

    let mut out = file_header();
    out.push('\n');
    out.push_str(PLATFORM_GUARD);
    out.push('\n');
    for module in imports {
        out.push_str(&format!("    @testable import {module}\n"));
    }
    out.push('\n');
    out.push_str(RUNNER_SHIM);
    out.push_str(&format!("    {DEPRECATION_ANNOTATION}\n"));
    out.push_str("    func run() {\n");
    out.push_str("        XCTMain([\n");
    for test_case in test_cases {
        out.push_str(&format!("            testCase({test_case}.allTests),\n"));
    }
    out.push_str("        ])\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
    out.push_str("(LinuxMainRunnerImpl() as LinuxMainRunner).run()\n");
    out.push_str("#endif\n");
    out
}

/// Writes `<tests_root>/LinuxMain.swift` and returns its path.
pub fn write_linux_main(
    tests_root: &Path,
    directories: &[&str],
    classes: &[&str],
) -> Result<PathBuf> {
    let path = linux_main_path(tests_root);
    write_generated(&path, &render_linux_main(directories, classes))?;
    Ok(path)
}
