//! Domain models for the life expectancy cleaning pipeline.
//!
//! The tables flowing between stages, from the wide source to the output:
//!
//! - [`WideTable`] / [`RawRecord`] - Source table, one column per year
//! - [`LongRecord`] - One row per (source row, year) pair, still textual
//! - [`DecomposedRecord`] - Composite key split, year and value coerced
//! - [`CleanRecord`] - Output row, fully typed

use serde::{Deserialize, Serialize};

/// Header of the composite key column in the Eurostat export.
pub const KEY_COLUMN: &str = r"unit,sex,age,geo\time";

/// Delimiter between the tokens of the composite key.
pub const KEY_DELIMITER: char = ',';

/// Output column order.
pub const OUTPUT_COLUMNS: [&str; 6] = ["unit", "sex", "age", "region", "year", "value"];

// =============================================================================
// Wide (source) table
// =============================================================================

/// One row of the wide source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Composite key, `unit,sex,age,region`.
    pub key: String,
    /// One cell per year column, in header order. `None` for missing cells.
    pub cells: Vec<Option<String>>,
}

/// The wide source table after the header has been checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WideTable {
    /// Year column labels, in header order.
    pub years: Vec<String>,
    /// Data rows.
    pub rows: Vec<RawRecord>,
}

impl WideTable {
    /// `(rows, columns)` including the key column.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.years.len() + 1)
    }
}

// =============================================================================
// Intermediate tables
// =============================================================================

/// One (row, year) pair after unpivoting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRecord {
    pub key: String,
    pub year: String,
    /// Raw cell text, empty when the cell was missing.
    pub value: String,
}

/// A long record with its key split and its year and value coerced.
///
/// `None` marks a year or value that did not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecomposedRecord {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: Option<i32>,
    pub value: Option<f64>,
}

impl DecomposedRecord {
    /// Re-join the key tokens in their original order.
    pub fn key(&self) -> String {
        [
            self.unit.as_str(),
            self.sex.as_str(),
            self.age.as_str(),
            self.region.as_str(),
        ]
        .join(",")
    }
}

// =============================================================================
// Output table
// =============================================================================

/// One row of the cleaned output.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i32,
    pub value: f64,
}

impl CleanRecord {
    /// Build an output row, or `None` if the year or value is missing.
    pub fn from_decomposed(record: DecomposedRecord) -> Option<Self> {
        Some(Self {
            year: record.year?,
            value: record.value?,
            unit: record.unit,
            sex: record.sex,
            age: record.age,
            region: record.region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decomposed(year: Option<i32>, value: Option<f64>) -> DecomposedRecord {
        DecomposedRecord {
            unit: "YR".into(),
            sex: "F".into(),
            age: "Y65".into(),
            region: "PT".into(),
            year,
            value,
        }
    }

    #[test]
    fn test_key_rejoins_tokens() {
        assert_eq!(decomposed(Some(2020), Some(1.0)).key(), "YR,F,Y65,PT");
    }

    #[test]
    fn test_from_decomposed_requires_year_and_value() {
        let clean = CleanRecord::from_decomposed(decomposed(Some(2020), Some(21.3))).unwrap();
        assert_eq!(clean.year, 2020);
        assert_eq!(clean.value, 21.3);
        assert_eq!(clean.region, "PT");

        assert!(CleanRecord::from_decomposed(decomposed(None, Some(21.3))).is_none());
        assert!(CleanRecord::from_decomposed(decomposed(Some(2020), None)).is_none());
    }

    #[test]
    fn test_wide_table_shape_counts_key_column() {
        let table = WideTable {
            years: vec!["2021".into(), "2020".into()],
            rows: vec![RawRecord {
                key: "YR,F,Y65,PT".into(),
                cells: vec![Some("21.3".into()), None],
            }],
        };
        assert_eq!(table.shape(), (1, 3));
    }
}
