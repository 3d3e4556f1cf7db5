use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

use crate::constants::extract::PROPERTY_HASH_HEX_DIGITS;

/// 32-bit property hash, canonically rendered as `0xHHHHHHHH`.
///
/// Hashes appear in dumps as exactly eight hex digits in either case; the
/// canonical form is uppercase with a `0x` prefix. Numeric ordering on the
/// inner value is equivalent to lexicographic ordering on the canonical
/// rendering, since every hash is fixed-width with the same prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyHash(u32);

impl PropertyHash {
    /// Parse from exactly eight hex digits (any case). Returns `None` for
    /// any other length or for non-hex input.
    pub fn from_hex_digits(digits: &str) -> Option<Self> {
        if digits.len() != PROPERTY_HASH_HEX_DIGITS {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    /// Raw 32-bit value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PropertyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// One deduplicated (hash, name) pair extracted from a dump line.
///
/// Equality is on the exact pair: two records with the same hash but
/// differently-cased names are distinct entries, since dumps may alias
/// names to hashes inconsistently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyRecord {
    /// Property hash as it appeared inside the parentheses.
    pub hash: PropertyHash,
    /// Trimmed name text preceding the hash's parentheses.
    pub name: String,
}

impl PropertyRecord {
    /// Build a record from a parsed hash and an already-trimmed name.
    pub fn new(hash: PropertyHash, name: impl Into<String>) -> Self {
        Self {
            hash,
            name: name.into(),
        }
    }
}

impl Ord for PropertyRecord {
    /// Export ordering: hash first, then case-insensitive name, then the
    /// exact name as a deterministic tie-break. Consistent with `Eq`, so a
    /// `BTreeSet` keyed on this ordering dedups on the exact pair.
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash
            .cmp(&other.hash)
            .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase()))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for PropertyRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deduplicated collection of property records in export order.
///
/// Built once per run by folding matched lines in, then consumed once to
/// produce the sorted table. Iteration order is the export order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertySet {
    records: BTreeSet<PropertyRecord>,
}

impl PropertySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, collapsing exact duplicates. Returns whether the
    /// record was new.
    pub fn insert(&mut self, record: PropertyRecord) -> bool {
        self.records.insert(record)
    }

    /// Number of unique records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records have been collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in export order.
    pub fn iter(&self) -> btree_set::Iter<'_, PropertyRecord> {
        self.records.iter()
    }
}

impl FromIterator<PropertyRecord> for PropertySet {
    fn from_iter<I: IntoIterator<Item = PropertyRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<PropertyRecord> for PropertySet {
    fn extend<I: IntoIterator<Item = PropertyRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a PropertyRecord;
    type IntoIter = btree_set::Iter<'a, PropertyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for PropertySet {
    type Item = PropertyRecord;
    type IntoIter = btree_set::IntoIter<PropertyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
