//! Extraction pipeline orchestration.
//!
//! Three stages, each a pure function of the one before: classify lines,
//! fold candidates into a deduplicated set, write the sorted table. No
//! state is shared between stages and the whole run either completes or
//! fails atomically from the caller's perspective.

use std::path::Path;

use tracing::debug;

use crate::decode::{DecodePolicy, read_dump};
use crate::errors::ExtractError;
use crate::matcher::match_property_line;
use crate::record::PropertySet;

/// Fold lines of dump text into a deduplicated, ordered property set.
///
/// Non-matching lines are skipped silently; they are not counted and not
/// reported. Identical (hash, name) pairs collapse to one entry no matter
/// how often they occur.
pub fn collect_properties<'a>(lines: impl Iterator<Item = &'a str>) -> PropertySet {
    let mut scanned = 0usize;
    let mut matched = 0usize;
    let mut set = PropertySet::new();
    for line in lines {
        scanned += 1;
        if let Some(parsed) = match_property_line(line) {
            matched += 1;
            set.insert(parsed.record);
        }
    }
    debug!(scanned, matched, unique = set.len(), "collected property records");
    set
}

/// Read a dump file and extract its unique property records.
///
/// Uses best-effort decoding: undecodable bytes are substituted rather than
/// aborting the read. A missing or unreadable source path is fatal and
/// surfaced before any output file is touched.
pub fn extract_properties(path: &Path) -> Result<PropertySet, ExtractError> {
    extract_properties_with(path, DecodePolicy::ReplaceInvalid)
}

/// `extract_properties` with an explicit decode policy.
pub fn extract_properties_with(
    path: &Path,
    policy: DecodePolicy,
) -> Result<PropertySet, ExtractError> {
    let text = read_dump(path, policy)?;
    Ok(collect_properties(text.lines()))
}
