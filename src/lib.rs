#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Reusable CLI runner shared by the `prophash` binary.
pub mod cli;
/// Centralized constants for pipeline defaults and table layout.
pub mod constants;
/// Input decoding policies for dump files.
pub mod decode;
/// Dump line classification.
pub mod matcher;
/// Extraction pipeline orchestration.
pub mod pipeline;
/// Property record and set types.
pub mod record;
/// CSV table writing.
pub mod writer;

mod errors;

pub use decode::{DecodePolicy, read_dump};
pub use errors::ExtractError;
pub use matcher::{PropertyLine, match_property_line};
pub use pipeline::{collect_properties, extract_properties, extract_properties_with};
pub use record::{PropertyHash, PropertyRecord, PropertySet};
pub use writer::write_property_table;
