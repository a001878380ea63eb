//! Wide TSV loader with encoding auto-detection.
//!
//! Reads the Eurostat export into a [`WideTable`]: the header must start
//! with the composite key column, every other header is a year label.

use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

use crate::error::{InputError, InputResult};
use crate::models::{RawRecord, WideTable, KEY_COLUMN};

/// Field delimiter of the source table
pub const SOURCE_DELIMITER: u8 = b'\t';

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "utf-8-sig" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8. A leading BOM is removed.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Parse the wide table from TSV text.
///
/// # Example
/// ```
/// use life_expectancy::parser::parse_wide_table;
///
/// let tsv = "unit,sex,age,geo\\time\t2021 \t2020 \nYR,F,Y65,PT\t21.3 \t: \n";
/// let table = parse_wide_table(tsv).unwrap();
///
/// assert_eq!(table.years, vec!["2021", "2020"]);
/// assert_eq!(table.rows[0].key, "YR,F,Y65,PT");
/// assert_eq!(table.rows[0].cells[1].as_deref(), Some(":"));
/// ```
pub fn parse_wide_table(content: &str) -> InputResult<WideTable> {
    let mut reader = ReaderBuilder::new()
        .delimiter(SOURCE_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let header = match records.next() {
        Some(result) => result.map_err(csv_error)?,
        None => return Err(InputError::Empty),
    };
    let years = check_header(&header)?;

    let mut rows = Vec::new();
    for result in records {
        let record = result.map_err(csv_error)?;
        rows.push(raw_record(&record, years.len()));
    }

    Ok(WideTable { years, rows })
}

/// Parse raw bytes, detecting the encoding first.
pub fn parse_bytes(bytes: &[u8]) -> InputResult<WideTable> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    parse_wide_table(&content)
}

/// Load the wide table from a file.
pub fn load_wide_table<P: AsRef<Path>>(path: P) -> InputResult<WideTable> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| InputError::from_io(path, e))?;
    parse_bytes(&bytes)
}

/// Check the key column and return the year labels.
fn check_header(header: &StringRecord) -> InputResult<Vec<String>> {
    let mut labels = header.iter().map(|s| s.trim().to_string());

    let first = labels.next().unwrap_or_default();
    if first != KEY_COLUMN {
        return Err(InputError::MissingKeyColumn {
            expected: KEY_COLUMN,
            found: first,
        });
    }

    Ok(labels.collect())
}

/// Build a row; missing trailing cells become `None`, extra cells are ignored.
///
/// The key is kept verbatim so region matching stays exact.
fn raw_record(record: &StringRecord, year_count: usize) -> RawRecord {
    let key = record.get(0).unwrap_or("").to_string();
    let cells = (1..=year_count)
        .map(|i| {
            record
                .get(i)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
        .collect();

    RawRecord { key, cells }
}

fn csv_error(e: csv::Error) -> InputError {
    InputError::Csv {
        line: e.position().map(|p| p.line()).unwrap_or(0),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "unit,sex,age,geo\\time\t2021 \t2020 ";

    #[test]
    fn test_simple_table() {
        let tsv = format!("{HEADER}\nYR,F,Y65,PT\t21.3 \t20.8 b\nYR,M,Y65,AT\t18.1 \t: \n");
        let table = parse_wide_table(&tsv).unwrap();

        assert_eq!(table.years, vec!["2021", "2020"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].key, "YR,F,Y65,PT");
        assert_eq!(table.rows[0].cells, vec![Some("21.3".into()), Some("20.8 b".into())]);
        assert_eq!(table.rows[1].cells[1].as_deref(), Some(":"));
        assert_eq!(table.shape(), (2, 3));
    }

    #[test]
    fn test_missing_cells_become_none() {
        let tsv = format!("{HEADER}\nYR,F,Y65,PT\t\nYR,F,Y65,AT\n");
        let table = parse_wide_table(&tsv).unwrap();

        assert_eq!(table.rows[0].cells, vec![None, None]);
        assert_eq!(table.rows[1].cells, vec![None, None]);
    }

    #[test]
    fn test_key_kept_verbatim() {
        let tsv = format!("{HEADER}\nYR,F,Y65,PT \t1 \t2\n");
        let table = parse_wide_table(&tsv).unwrap();

        assert_eq!(table.rows[0].key, "YR,F,Y65,PT ");
        assert_eq!(table.rows[0].cells[0].as_deref(), Some("1"));
    }

    #[test]
    fn test_extra_cells_ignored() {
        let tsv = format!("{HEADER}\nYR,F,Y65,PT\t1\t2\t3\t4\n");
        let table = parse_wide_table(&tsv).unwrap();

        assert_eq!(table.rows[0].cells.len(), 2);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let tsv = format!("{HEADER}\nYR,F,Y65,PT\t1\t2\n\nYR,F,Y65,AT\t3\t4\n");
        let table = parse_wide_table(&tsv).unwrap();

        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_empty_input_error() {
        let err = parse_wide_table("").unwrap_err();
        assert!(matches!(err, InputError::Empty));
    }

    #[test]
    fn test_missing_key_column_error() {
        let err = parse_wide_table("country\t2021\nPT\t80.1\n").unwrap_err();
        match err {
            InputError::MissingKeyColumn { expected, found } => {
                assert_eq!(expected, KEY_COLUMN);
                assert_eq!(found, "country");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_key_column_must_come_first() {
        let err = parse_wide_table("2021\tunit,sex,age,geo\\time\n1\tYR,F,Y65,PT\n").unwrap_err();
        assert!(matches!(err, InputError::MissingKeyColumn { .. }));
    }

    #[test]
    fn test_bom_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(format!("{HEADER}\nYR,F,Y65,PT\t1\t2\n").as_bytes());
        let table = parse_bytes(&bytes).unwrap();

        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_wide_table(dir.path().join("missing.tsv")).unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.tsv");
        std::fs::write(&path, format!("{HEADER}\nYR,F,Y65,PT\t21.3\t20.8\n")).unwrap();

        let table = load_wide_table(&path).unwrap();
        assert_eq!(table.rows[0].cells[0].as_deref(), Some("21.3"));
    }
}
