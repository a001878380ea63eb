//! Composite key decomposition.

use crate::error::{TransformError, TransformResult};
use crate::models::{DecomposedRecord, LongRecord, KEY_DELIMITER};

use super::coerce::{parse_value, parse_year};

/// The four tokens of a composite key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParts<'a> {
    pub unit: &'a str,
    pub sex: &'a str,
    pub age: &'a str,
    pub region: &'a str,
}

/// Split `unit,sex,age,region`.
///
/// Any other token count is an error; keys are never padded or truncated.
pub fn split_key(key: &str) -> TransformResult<KeyParts<'_>> {
    let tokens: Vec<&str> = key.split(KEY_DELIMITER).collect();

    match tokens[..] {
        [unit, sex, age, region] => Ok(KeyParts { unit, sex, age, region }),
        _ => Err(TransformError::MalformedKey {
            key: key.to_string(),
            tokens: tokens.len(),
        }),
    }
}

/// Split the key and coerce year and value of one long record.
pub fn decompose_record(record: &LongRecord) -> TransformResult<DecomposedRecord> {
    let parts = split_key(&record.key)?;

    Ok(DecomposedRecord {
        unit: parts.unit.to_string(),
        sex: parts.sex.to_string(),
        age: parts.age.to_string(),
        region: parts.region.to_string(),
        year: parse_year(&record.year),
        value: parse_value(&record.value),
    })
}

/// Decompose every long record, failing on the first malformed key.
pub fn decompose(records: &[LongRecord]) -> TransformResult<Vec<DecomposedRecord>> {
    records.iter().map(decompose_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long(key: &str, year: &str, value: &str) -> LongRecord {
        LongRecord {
            key: key.into(),
            year: year.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_split_key() {
        let parts = split_key("Y_LT60,F,Y1,AT").unwrap();
        assert_eq!(parts.unit, "Y_LT60");
        assert_eq!(parts.sex, "F");
        assert_eq!(parts.age, "Y1");
        assert_eq!(parts.region, "AT");
    }

    #[test]
    fn test_split_key_wrong_token_count() {
        for (key, count) in [("YR,F,PT", 3), ("YR,F,Y65,PT,X", 5), ("", 1)] {
            match split_key(key) {
                Err(TransformError::MalformedKey { tokens, .. }) => assert_eq!(tokens, count),
                other => panic!("expected malformed key for {key:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_tokens_are_kept() {
        let parts = split_key("YR,,Y65,").unwrap();
        assert_eq!(parts.sex, "");
        assert_eq!(parts.region, "");
    }

    #[test]
    fn test_decompose_record() {
        let record = decompose_record(&long("Y_LT60,F,Y1,AT", "2020", "80.5 b")).unwrap();
        assert_eq!(record.unit, "Y_LT60");
        assert_eq!(record.region, "AT");
        assert_eq!(record.year, Some(2020));
        assert_eq!(record.value, Some(80.5));
    }

    #[test]
    fn test_decompose_keeps_null_markers() {
        let record = decompose_record(&long("YR,F,Y65,PT", "n/a", ":")).unwrap();
        assert_eq!(record.year, None);
        assert_eq!(record.value, None);
    }

    #[test]
    fn test_key_round_trip() {
        let key = "YR,M,Y_GE85,DE_TOT";
        let record = decompose_record(&long(key, "2019", "6.1")).unwrap();
        assert_eq!(record.key(), key);
    }

    #[test]
    fn test_decompose_fails_on_first_malformed_key() {
        let records = vec![long("YR,F,Y65,PT", "2020", "1"), long("YR,F", "2020", "1")];
        assert!(decompose(&records).is_err());
    }
}
