//! Wide to long reshaping.

use crate::models::{LongRecord, WideTable};

/// Emit one [`LongRecord`] per (row, year column) pair.
///
/// Rows come out in source order, and within a row the years follow the
/// header order. Missing cells become empty values.
pub fn melt(table: &WideTable) -> Vec<LongRecord> {
    let mut records = Vec::with_capacity(table.rows.len() * table.years.len());

    for row in &table.rows {
        for (year, cell) in table.years.iter().zip(&row.cells) {
            records.push(LongRecord {
                key: row.key.clone(),
                year: year.clone(),
                value: cell.clone().unwrap_or_default(),
            });
        }
    }

    records
}
