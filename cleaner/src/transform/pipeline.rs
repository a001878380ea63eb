//! High-level pipeline API for cleaning the life expectancy table.
//!
//! Each stage is a pure function over a typed table; this module chains
//! them, logs the table shape after every stage and writes the result.
//!
//! # Example
//!
//! ```rust,no_run
//! use life_expectancy::{clean, clean_with_options, CleanOptions};
//!
//! // Fixed input and output paths, Portugal only
//! let report = clean("PT")?;
//! println!("Wrote {} rows", report.written_rows);
//!
//! // Same, with explicit paths
//! let options = CleanOptions {
//!     region: "AT".to_string(),
//!     ..CleanOptions::default()
//! };
//! clean_with_options(&options)?;
//! # Ok::<(), life_expectancy::PipelineError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

use super::coerce::parse_value;
use super::decompose::decompose;
use super::filter::{drop_invalid_values, filter_region, project};
use super::melt::melt;
use crate::error::PipelineResult;
use crate::logs::{LogEntry, LogLevel, Logger};
use crate::models::{CleanRecord, LongRecord, WideTable};
use crate::output::write_clean_csv;
use crate::parser::{load_wide_table, parse_wide_table};

/// Source table, relative to the working directory
pub const DEFAULT_INPUT_PATH: &str = "life_expectancy/data/eu_life_expectancy_raw.tsv";

/// Destination table, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "life_expectancy/data/pt_life_expectancy.csv";

/// Region kept when none is given
pub const DEFAULT_REGION: &str = "PT";

/// Options for the cleaning pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Wide TSV to read
    pub input_path: PathBuf,

    /// CSV to overwrite; does not depend on `region`
    pub output_path: PathBuf,

    /// Region code to keep (exact, case-sensitive match)
    pub region: String,
}

impl CleanOptions {
    /// Default paths, given region.
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

/// Row counts for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Region code the output was filtered to
    pub region: String,

    /// Source file, if the run read one
    pub input_path: Option<PathBuf>,

    /// Destination file, if the run wrote one
    pub output_path: Option<PathBuf>,

    /// Data rows in the wide table
    pub loaded_rows: usize,

    /// Year columns in the wide table
    pub year_columns: usize,

    /// Rows after unpivoting
    pub melted_rows: usize,

    /// Rows dropped because the value had no number in it
    pub dropped_values: usize,

    /// Rows dropped because they belong to another region
    pub other_regions: usize,

    /// Rows dropped because the year label is not an integer
    pub dropped_years: usize,

    /// Rows in the output
    pub written_rows: usize,
}

/// Cleaned rows plus the counts that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutput {
    pub records: Vec<CleanRecord>,
    pub report: CleanReport,
}

/// Clean the fixed source file for `region` and overwrite the fixed output file.
///
/// Calling this for several regions in a row leaves only the last one on
/// disk, since the destination does not depend on the region.
pub fn clean(region: &str) -> PipelineResult<CleanReport> {
    clean_with_options(&CleanOptions::for_region(region))
}

/// Run the whole pipeline with explicit paths.
pub fn clean_with_options(options: &CleanOptions) -> PipelineResult<CleanReport> {
    clean_with_logger(options, &mut Logger::stderr())
}

/// Run the whole pipeline, sending progress lines to `logger`.
pub fn clean_with_logger<W: Write>(
    options: &CleanOptions,
    logger: &mut Logger<W>,
) -> PipelineResult<CleanReport> {
    logger.info(format!("📖 Reading {}", options.input_path.display()));
    let table = load_wide_table(&options.input_path)?;

    let mut output = clean_table(&table, &options.region, logger)?;

    logger.info(format!("💾 Writing {}", options.output_path.display()));
    write_clean_csv(&options.output_path, &output.records)?;
    logger.success(format!(
        "Wrote {} rows for region {}",
        output.records.len(),
        options.region
    ));

    output.report.input_path = Some(options.input_path.clone());
    output.report.output_path = Some(options.output_path.clone());
    Ok(output.report)
}

/// Clean in-memory TSV content. Nothing is written.
pub fn clean_str(content: &str, region: &str) -> PipelineResult<CleanOutput> {
    let table = parse_wide_table(content)?;
    clean_table(&table, region, &mut Logger::stderr())
}

/// Run every stage between loading and writing.
pub fn clean_table<W: Write>(
    table: &WideTable,
    region: &str,
    logger: &mut Logger<W>,
) -> PipelineResult<CleanOutput> {
    let (rows, cols) = table.shape();
    logger.stage("loading", rows, cols);

    let long = melt(table);
    logger.stage("melting", long.len(), 3);

    let decomposed = decompose(&long)?;
    logger.stage("splitting", decomposed.len(), 6);

    let valued = drop_invalid_values(decomposed);
    let dropped_values = long.len() - valued.len();
    logger.stage("cleaning value column", valued.len(), 6);
    if dropped_values > 0 {
        logger.warning(format!("{} rows dropped (no numeric value)", dropped_values));
        log_dropped_samples(&long, logger);
    }

    let in_region = filter_region(valued, region);
    let other_regions = long.len() - dropped_values - in_region.len();
    logger.stage("region filtering", in_region.len(), 6);

    let records = project(in_region);
    let dropped_years = long.len() - dropped_values - other_regions - records.len();
    if dropped_years > 0 {
        logger.warning(format!("{} rows dropped (year is not an integer)", dropped_years));
    }
    if records.is_empty() {
        logger.warning(format!("No rows left for region {}", region));
    }

    let report = CleanReport {
        region: region.to_string(),
        input_path: None,
        output_path: None,
        loaded_rows: rows,
        year_columns: table.years.len(),
        melted_rows: long.len(),
        dropped_values,
        other_regions,
        dropped_years,
        written_rows: records.len(),
    };

    Ok(CleanOutput { records, report })
}

/// Show a few of the raw values that were dropped
fn log_dropped_samples<W: Write>(long: &[LongRecord], logger: &mut Logger<W>) {
    let samples: Vec<String> = long
        .iter()
        .filter(|r| parse_value(&r.value).is_none())
        .map(|r| format!("{:?}", r.value))
        .take(5)
        .collect();
    let line = format!("e.g. {}", samples.join(", "));
    logger.log(LogEntry::new(LogLevel::Info, line).with_indent(1));
}
