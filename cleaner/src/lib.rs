//! # Life Expectancy - Eurostat table cleaning
//!
//! Reshapes the wide Eurostat life expectancy export (one column per year,
//! one composite `unit,sex,age,geo\time` key column) into a long CSV for a
//! single region.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Wide TSV   │────▶│   Parser    │────▶│  Transform  │────▶│  Long CSV   │
//! │ (year cols) │     │ (key check) │     │ (melt/clean)│     │ (1 region)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let report = life_expectancy::clean("PT").unwrap();
//! println!("Wrote {} rows", report.written_rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per pipeline layer
//! - [`models`] - Typed tables (wide, long, decomposed, clean)
//! - [`parser`] - TSV loading with encoding detection
//! - [`transform`] - Pipeline stages and orchestration
//! - [`output`] - CSV writer
//! - [`logs`] - Progress logs

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Writing
pub mod output;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    InputError,
    TransformError,
    OutputError,
    PipelineError,
    PipelineResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    RawRecord,
    WideTable,
    LongRecord,
    DecomposedRecord,
    CleanRecord,
    KEY_COLUMN,
    OUTPUT_COLUMNS,
};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    load_wide_table,
    parse_wide_table,
    parse_bytes,
    detect_encoding,
    decode_content,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    clean,
    clean_with_options,
    clean_with_logger,
    clean_str,
    clean_table,
    CleanOptions,
    CleanReport,
    CleanOutput,
    DEFAULT_INPUT_PATH,
    DEFAULT_OUTPUT_PATH,
    DEFAULT_REGION,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use output::{to_csv_bytes, write_clean_csv};

// =============================================================================
// Re-exports - Logging
// =============================================================================

pub use logs::{LogEntry, LogLevel, Logger};
