//! Row filters and the final projection.

use crate::models::{CleanRecord, DecomposedRecord};

/// Remove rows whose value did not parse.
pub fn drop_invalid_values(records: Vec<DecomposedRecord>) -> Vec<DecomposedRecord> {
    records.into_iter().filter(|r| r.value.is_some()).collect()
}

/// Keep rows whose region equals `region` exactly.
///
/// Case-sensitive, no trimming on either side.
pub fn filter_region(records: Vec<DecomposedRecord>, region: &str) -> Vec<DecomposedRecord> {
    records.into_iter().filter(|r| r.region == region).collect()
}

/// Project to output rows, dropping rows whose year did not parse.
pub fn project(records: Vec<DecomposedRecord>) -> Vec<CleanRecord> {
    records
        .into_iter()
        .filter_map(CleanRecord::from_decomposed)
        .collect()
}
