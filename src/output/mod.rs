//! Generated Swift sources consumed by `swift test` on Linux.

mod extension;
mod linux_main;

pub use extension::{extension_path, render_class_extension, write_class_extension};
pub use linux_main::{linux_main_path, render_linux_main, write_linux_main, LINUX_MAIN_FILE};

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{IoError, Result};

pub const GENERATOR_NAME: &str = "generate-linux-tests";

pub const DEPRECATION_ANNOTATION: &str = "@available(*, deprecated, message: \"not actually deprecated. Just deprecated to allow deprecated tests (which test deprecated functionality) without warnings\")";

/// Banner placed at the top of every generated file.
pub fn file_header() -> String {
    format!(
        "import XCTest\n\
         \n\
         ///\n\
         /// NOTE: This file was generated by {GENERATOR_NAME}\n\
         ///\n\
         /// Do NOT edit this file directly as it will be regenerated automatically when needed.\n\
         ///\n"
    )
}

/// Replaces whatever is at `path`.
fn write_generated(path: &Path, contents: &str) -> Result<()> {
    info!("Creating file: {}", path.display());
    fs::write(path, contents).map_err(|e| IoError::write_error(path, e))?;
    Ok(())
}
