use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for dump access and export failures.
///
/// Decoding anomalies and grammar mismatches are not represented here:
/// both are recovered locally (substitution, line skip) and never become
/// errors. Every variant is terminal for the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source dump could not be opened or read.
    #[error("failed to read property dump '{}': {source}", path.display())]
    InputAccess {
        /// Input path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The destination table could not be created or written.
    #[error("failed to write property table '{}': {source}", path.display())]
    OutputAccess {
        /// Output path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}
