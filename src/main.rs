use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use linux_test_gen::{cli, generator, logging};
use tracing::info;

/// Exit status when the operator interrupts the run.
const INTERRUPTED_EXIT_CODE: i32 = 1;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose));

    ctrlc::set_handler(|| std::process::exit(INTERRUPTED_EXIT_CODE))
        .context("Failed to install interrupt handler")?;

    args.validate().context("Invalid arguments")?;

    println!("** Generating Linux Tests files **");

    let summary = generator::generate(&args.tests_dir).with_context(|| {
        format!(
            "Failed to generate Linux tests in {}",
            args.tests_dir.display()
        )
    })?;

    info!(
        "Scanned {} files, wrote {} extension files for {} classes ({} tests)",
        summary.files_scanned,
        summary.extension_files.len(),
        summary.test_classes,
        summary.test_functions
    );

    println!("** All tests generated **");

    Ok(())
}
