//! Domain-specific errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors the pipeline knows how to report by name.
///
/// Anything not covered here reaches the top level as a plain
/// [`anyhow::Error`] and is reported as unexpected.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("source directory not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("source path is not a directory: {0}")]
    SourceNotADirectory(PathBuf),
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
