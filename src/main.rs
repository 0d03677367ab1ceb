//! allsky-archiver — archives dated exposure and timelapse folders.
//!
//! Thin binary entry point. All logic lives in `allsky-archiver-core`.

use allsky_archiver_core::ArchiverConfig;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Archive and move old 'exposures' and 'timelapse' folders.
#[derive(Debug, Parser)]
#[command(name = "archiver", version, about)]
struct Cli {
    /// Base directory to scan
    base_directory: PathBuf,

    /// Target directory to store archives
    target_directory: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Progress goes to stdout, one line per decision.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let config = ArchiverConfig::new(&cli.base_directory, &cli.target_directory);
    allsky_archiver_core::run(&config).with_context(|| {
        format!(
            "archiving {} into {} failed",
            cli.base_directory.display(),
            cli.target_directory.display()
        )
    })?;

    Ok(())
}
