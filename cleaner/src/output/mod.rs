//! CSV writer for the cleaned table.
//!
//! The header is always `unit,sex,age,region,year,value`, even when no row
//! survived the filters. The destination is overwritten, never appended to.

use csv::WriterBuilder;
use std::path::Path;

use crate::error::{OutputError, OutputResult};
use crate::models::{CleanRecord, OUTPUT_COLUMNS};

/// Render records as CSV bytes, header first, no index column.
pub fn to_csv_bytes(records: &[CleanRecord]) -> OutputResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| OutputError::Csv(e.into_error().into()))
}

/// Overwrite `path` with the rendered table.
///
/// The parent directory must exist.
pub fn write_clean_csv<P: AsRef<Path>>(path: P, records: &[CleanRecord]) -> OutputResult<()> {
    let path = path.as_ref();
    let bytes = to_csv_bytes(records)?;

    std::fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
