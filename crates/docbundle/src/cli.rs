//! Command line surface and pipeline orchestration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::app::combine;
use crate::app::scan::{Scanner, ScannerConfig};

#[derive(Debug, Parser)]
#[command(
    name = "docbundle",
    version,
    about = "Merge a scattered tree of notes into a single markdown document"
)]
pub struct Cli {
    /// Root directory to search.
    #[arg(
        long,
        value_name = "PATH",
        default_value = ".",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    pub src: PathBuf,

    /// Output file path.
    #[arg(
        long,
        value_name = "PATH",
        default_value = "./combined.md",
        num_args = 0..=1,
        default_missing_value = "./combined.md"
    )]
    pub out: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing survived filtering; no output file was touched.
    Empty,
    /// The combined document was written with this many files.
    Written { files: usize },
}

/// Run the full pipeline: scan, combine, write.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let cfg = ScannerConfig::from_root(&cli.src);
    let entries = Scanner::new().scan(&cfg)?;

    if entries.is_empty() {
        tracing::warn!(src = %cli.src.display(), "no files to combine; skipping write");
        return Ok(Outcome::Empty);
    }

    let document = combine::build_document(&entries)?;
    combine::write_document(&document, &cli.out)?;
    tracing::info!(
        files = document.file_count,
        out = %cli.out.display(),
        "combined document written"
    );

    Ok(Outcome::Written {
        files: document.file_count,
    })
}
