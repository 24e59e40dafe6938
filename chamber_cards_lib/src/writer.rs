//! CSV output of extracted records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::CardsError;
use crate::record::{Record, HEADER};

/// Write the header row and one row per record to `sink`, in order.
///
/// The header is always written, so an empty slice still produces a valid file.
pub fn write_records<W: Write>(sink: W, records: &[Record]) -> Result<(), CardsError> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(sink);
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write all records to it.
pub fn write_csv_file(path: &Path, records: &[Record]) -> Result<(), CardsError> {
    let file = File::create(path)?;
    write_records(file, records)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(())
}
