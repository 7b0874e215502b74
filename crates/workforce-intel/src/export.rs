//! Flat delimited export of any result sequence.

use serde::Serialize;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize export rows: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid UTF-8")]
    Encoding,
}

/// Write `records` as CSV, one row per record with a header row taken from the field names.
pub fn write_csv<T: Serialize, W: Write>(records: &[T], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|_| ExportError::Encoding)
}
