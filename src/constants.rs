/// Constants used by the extraction pipeline and CLI defaults.
pub mod extract {
    /// Default input dump filename when no positional path is given.
    pub const DEFAULT_INPUT_FILENAME: &str = "property.txt";
    /// Default output table filename for `-o`/`--output`.
    pub const DEFAULT_OUTPUT_FILENAME: &str = "property_hashes.csv";
    /// Number of hex digits in a property hash as it appears in dumps.
    pub const PROPERTY_HASH_HEX_DIGITS: usize = 8;
}

/// Constants used by the CSV table layout.
pub mod table {
    /// Header row written before any data rows.
    pub const CSV_HEADER: &str = "property_hash,property_name";
}
