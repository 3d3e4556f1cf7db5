//! CSV table writing.
//!
//! The writer owns the destination file for the duration of the write: it
//! creates or overwrites the path, emits the fixed header, then one row per
//! record in set order. Rows are `\n`-terminated, hash column first.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::constants::table::CSV_HEADER;
use crate::errors::ExtractError;
use crate::record::PropertySet;

/// Write the property table to `path`, returning the number of data rows.
///
/// Creates or overwrites the destination. Any write failure is fatal for
/// the run; no partial-file cleanup is attempted beyond what the OS
/// guarantees.
pub fn write_property_table(path: &Path, records: &PropertySet) -> Result<usize, ExtractError> {
    let output_error = |source: io::Error| ExtractError::OutputAccess {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    write_rows(&mut writer, records).map_err(output_error)?;
    writer.flush().map_err(output_error)?;
    Ok(records.len())
}

fn write_rows(writer: &mut impl Write, records: &PropertySet) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for record in records {
        writeln!(writer, "{},{}", record.hash, csv_field(&record.name))?;
    }
    Ok(())
}

/// Minimal CSV quoting: fields containing a comma, quote, or line break are
/// wrapped in quotes with inner quotes doubled; everything else is verbatim.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
