//! Tabular encoding stage
//!
//! Writes the selected records as a four-column CSV with a fixed header row,
//! and reads such a file back row by row for the tree stage. Field order is
//! part of the format contract: name, id, description, price, always.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::debug;

use crate::domain::{ProductRecord, Result, RECORD_FIELD_COUNT};

/// Header row of the tabular file, in field order
pub const TABULAR_HEADER: [&str; RECORD_FIELD_COUNT] =
    ["product name", "product id", "short description", "product price"];

/// Encodes the header row plus one row per record into `sink`
///
/// Fields are quoted only when a delimiter, quote, or line break forces it;
/// embedded quotes are doubled. The sink is flushed before returning, so a
/// caller that drops it immediately afterwards still gets complete output.
///
/// Returns the number of data rows written; the header is not counted.
pub fn encode_tabular<W: Write>(records: &[ProductRecord], sink: W) -> Result<usize> {
    let mut writer = WriterBuilder::new().from_writer(sink);

    writer.write_record(TABULAR_HEADER)?;
    for record in records {
        writer.write_record(record.as_fields())?;
    }
    writer.flush()?;

    debug!(rows = records.len(), "Tabular encoding completed");
    Ok(records.len())
}

/// Row-by-row reader over a tabular byte source
///
/// Rows come back in file order with no header handling: the first call to
/// [`read_row`](Self::read_row) returns the header row itself, which is how
/// the tree stage decides whether the source has any content at all. Reading
/// is strict - a row whose field count differs from the first row's is an
/// error, not a silent pad or truncate.
pub struct TabularReader<R: Read> {
    inner: csv::Reader<R>,
    record: StringRecord,
}

impl<R: Read> TabularReader<R> {
    /// Wraps a tabular byte source
    pub fn new(source: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(source);
        Self {
            inner,
            record: StringRecord::new(),
        }
    }

    /// Reads the next row, header included
    ///
    /// Returns `Ok(None)` once the source is exhausted; a zero-length source
    /// yields `None` on the very first call.
    pub fn read_row(&mut self) -> Result<Option<StringRecord>> {
        if self.inner.read_record(&mut self.record)? {
            Ok(Some(self.record.clone()))
        } else {
            Ok(None)
        }
    }
}
