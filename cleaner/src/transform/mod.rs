//! Transformation module.
//!
//! Stages between loading and writing, each a pure function:
//! - Melt: wide rows to (row, year) records
//! - Decompose: split the composite key, coerce year and value
//! - Coerce: year/value parsing and annotation stripping
//! - Filter: drop unparseable rows, keep one region, project
//! - Pipeline: chains the stages and writes the result

pub mod coerce;
pub mod decompose;
pub mod filter;
pub mod melt;
pub mod pipeline;

pub use coerce::{parse_value, parse_year, strip_non_numeric};
pub use decompose::{decompose, decompose_record, split_key, KeyParts};
pub use filter::{drop_invalid_values, filter_region, project};
pub use melt::melt;
pub use pipeline::*;
