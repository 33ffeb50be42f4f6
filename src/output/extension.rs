use std::path::{Path, PathBuf};

use super::{file_header, write_generated, DEPRECATION_ANNOTATION};
use crate::error::Result;
use crate::scanner::TestClass;

const SOURCE_EXTENSION: &str = ".swift";
const EXTENSION_SUFFIX: &str = "+XCTest.swift";

/// `FooTests.swift` -> `FooTests+XCTest.swift`, next to the source.
pub fn extension_path(source: &Path) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name
        .strip_suffix(SOURCE_EXTENSION)
        .unwrap_or(file_name.as_str());
    source.with_file_name(format!("{stem}{EXTENSION_SUFFIX}"))
}

/// One `allTests` extension per class, in discovery order.
pub fn render_class_extension(classes: &[TestClass]) -> String {
    let mut out = file_header();
    out.push('\n');

    for class in classes {
        let name = &class.name;
        out.push_str(&format!("extension {name} {{\n\n"));
        out.push_str(&format!("    {DEPRECATION_ANNOTATION}\n"));
        out.push_str(&format!(
            "    static var allTests: [(String, ({name}) -> () throws -> Void)] {{\n"
        ));
        out.push_str("        return [\n");
        for function in &class.functions {
            out.push_str(&format!("            (\"{function}\", {function}),\n"));
        }
        out.push_str("        ]\n");
        out.push_str("    }\n");
        out.push_str("}\n");
    }

    out
}

/// Writes the companion file for `source` and returns its path.
pub fn write_class_extension(source: &Path, classes: &[TestClass]) -> Result<PathBuf> {
    let path = extension_path(source);
    write_generated(&path, &render_class_extension(classes))?;
    Ok(path)
}
