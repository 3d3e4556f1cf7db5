//! Input decoding policies for dump files.
//!
//! Dumps come out of memory-scraping tools and are not guaranteed to be
//! clean UTF-8. The pipeline defaults to substitute-and-continue so a few
//! bad bytes never abort a whole export.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::ExtractError;

/// How undecodable byte sequences in the input are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Replace invalid sequences with U+FFFD and keep reading.
    #[default]
    ReplaceInvalid,
    /// Treat invalid sequences as an input-access failure.
    Strict,
}

/// Read a whole dump file under the given decode policy.
///
/// Failure to open or read the file is fatal and reported before any
/// output is touched.
pub fn read_dump(path: &Path, policy: DecodePolicy) -> Result<String, ExtractError> {
    let input_error = |source: io::Error| ExtractError::InputAccess {
        path: path.to_path_buf(),
        source,
    };
    let bytes = fs::read(path).map_err(input_error)?;
    match policy {
        DecodePolicy::ReplaceInvalid => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        DecodePolicy::Strict => String::from_utf8(bytes)
            .map_err(|err| input_error(io::Error::new(io::ErrorKind::InvalidData, err))),
    }
}
