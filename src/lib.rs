/// Linux Test Generator
///
/// Scans a Swift `Tests/` tree for `XCTestCase` subclasses and writes the
/// `allTests` extensions and `LinuxMain.swift` that XCTest needs on
/// platforms without Objective-C runtime test discovery.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod scanner;

pub use discovery::{SourceFile, TestDirectory, TestTree};
pub use error::{Error, Result};
pub use generator::{generate, GenerationSummary};
pub use scanner::TestClass;
