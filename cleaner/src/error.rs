//! Error types for the life expectancy cleaning pipeline.
//!
//! One error type per pipeline layer:
//!
//! - [`InputError`] - Loading the wide TSV table
//! - [`TransformError`] - Reshaping rows (composite key decomposition)
//! - [`OutputError`] - Writing the cleaned CSV
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across stage boundaries.
//!
//! Unparseable cell values are not errors: those rows are dropped and only
//! counted in [`crate::CleanReport`].

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while loading the source table.
#[derive(Debug, Error)]
pub enum InputError {
    /// Source file does not exist.
    #[error("Input file not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file exists but could not be read.
    #[error("Cannot read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source has no header row.
    #[error("Input table is empty")]
    Empty,

    /// Header row does not start with the composite key column.
    #[error("Expected composite key column '{expected}' as first header, found '{found}'")]
    MissingKeyColumn { expected: &'static str, found: String },

    /// TSV framing error.
    #[error("Invalid TSV at line {line}: {message}")]
    Csv { line: u64, message: String },
}

impl InputError {
    /// Classify an I/O failure on the source path.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::NotFound { path, source }
        } else {
            InputError::Read { path, source }
        }
    }
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors while reshaping rows.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Composite key does not split into exactly four tokens.
    #[error("Composite key '{key}' has {tokens} comma-separated tokens, expected 4")]
    MalformedKey { key: String, tokens: usize },
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while writing the cleaned table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Destination could not be created or written.
    #[error("Cannot write output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record serialization failed.
    #[error("Cannot serialize output row: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::clean`]. Every variant is
/// fatal; the pipeline never retries.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loading error.
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Reshaping error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Writing error.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl PipelineError {
    /// Source file missing or unreadable.
    pub fn is_input_not_found(&self) -> bool {
        matches!(
            self,
            PipelineError::Input(InputError::NotFound { .. } | InputError::Read { .. })
        )
    }

    /// Source present but not shaped like the expected table.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            PipelineError::Input(
                InputError::Empty | InputError::MissingKeyColumn { .. } | InputError::Csv { .. }
            ) | PipelineError::Transform(TransformError::MalformedKey { .. })
        )
    }

    /// Destination could not be written.
    pub fn is_output_write(&self) -> bool {
        matches!(self, PipelineError::Output(_))
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for reshaping.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for writing.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
