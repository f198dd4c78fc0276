//! CSV source loading.

use kadry::{PipelineError, Result, Source};
use polars::prelude::*;
use std::path::PathBuf;

/// Loads the raw résumé export from a comma-delimited file.
///
/// The first column of the export is a row index and is discarded;
/// header names are whitespace-trimmed. Column order otherwise follows
/// the source header order.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    /// Create a loader for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the source file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Source for CsvLoader {
    fn load(&self) -> Result<DataFrame> {
        if !self.path.exists() {
            return Err(PipelineError::SourceNotFound(self.path.clone()));
        }

        let mut df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(self.path.clone()))?
            .finish()?;

        // The export's first column is its row index, not data.
        let names = df.get_column_names_owned();
        if let Some(index_column) = names.first() {
            df = df.drop(index_column.as_str())?;
        }

        let trimmed: Vec<String> = df
            .get_column_names_str()
            .iter()
            .map(|name| name.trim().to_string())
            .collect();
        df.set_column_names(trimmed)?;

        Ok(df)
    }
}
