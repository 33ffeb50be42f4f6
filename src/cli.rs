use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

pub const DEFAULT_TESTS_DIR: &str = "Tests";

#[derive(Parser, Debug)]
#[command(name = "generate-linux-tests")]
#[command(about = "Generate Linux Tests! Writes XCTest allTests extensions and LinuxMain.swift", long_about = None)]
pub struct Args {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The path for the tests directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TESTS_DIR)]
    pub tests_dir: PathBuf,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_tests_dir(&self.tests_dir)
    }
}

pub fn validate_tests_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Tests directory does not exist: {}", path.display());
    }

    if !path.is_dir() {
        anyhow::bail!("Tests path is not a directory: {}", path.display());
    }

    Ok(())
}
