//! Error types for pipeline execution.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can abort a pipeline run.
///
/// A missing source file is the only defined fatal input condition; all
/// other input irregularities (unparseable salary text, unknown currency
/// or category values, unmatched free-text patterns) have silent
/// fallbacks inside the stages and never surface here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source CSV file does not exist.
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by the persistence sink while writing output arrays.
    #[error("export error: {0}")]
    Export(String),
}
