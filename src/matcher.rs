//! Dump line classification.
//!
//! Each line is evaluated independently against a single anchored pattern;
//! anything that does not match is noise and is skipped by the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{PropertyHash, PropertyRecord};

/// Matches one property record line, e.g.:
///
/// ```text
///     0: ParallelUnitNum(D787B5A5) 15000001
/// ```
///
/// Captures: name text, the 8-digit hash inside the parentheses, and the
/// trailing hex value. Lines with the wrong digit count in either hex
/// group, extra trailing tokens, or a missing leading integer do not match.
static PROPERTY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+:\s*([^()\r\n]+?)\(([0-9A-Fa-f]{8})\)\s+([0-9A-Fa-f]+)\s*$").unwrap()
});

/// Full parse result for one matched dump line.
///
/// The trailing hex value is not part of the exported record, but stays
/// accessible here for consumers that need the raw line contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyLine {
    /// The (hash, name) pair carried into the export.
    pub record: PropertyRecord,
    /// Trailing hex group, verbatim as it appeared in the dump.
    pub value_hex: String,
}

/// Classify one line of dump text.
///
/// Returns the extracted record candidate, or `None` when the line does not
/// match the grammar. Never panics on malformed input. The name is trimmed;
/// the hash is case-normalized to its canonical uppercase form.
pub fn match_property_line(line: &str) -> Option<PropertyLine> {
    let captures = PROPERTY_LINE.captures(line)?;
    let name = captures.get(1)?.as_str().trim();
    let hash = PropertyHash::from_hex_digits(captures.get(2)?.as_str())?;
    let value_hex = captures.get(3)?.as_str().to_string();
    Some(PropertyLine {
        record: PropertyRecord::new(hash, name),
        value_hex,
    })
}
