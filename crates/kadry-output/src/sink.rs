//! Persistence sinks for the exported arrays.

use ndarray::{Array1, Array2};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Feature matrix file name, written into the sink directory.
pub const X_FILENAME: &str = "x_data.csv";

/// Target vector file name.
pub const Y_FILENAME: &str = "y_data.csv";

/// Errors raised while persisting exported arrays.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExportError> for kadry::PipelineError {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Opaque persistence sink for the finalized feature matrix and target
/// vector.
///
/// Row `i` of both arrays must correspond to the same source record;
/// the sink is responsible for keeping that order intact on disk.
pub trait ArraySink {
    /// Persist both arrays.
    fn persist(&self, features: &Array2<f64>, target: &Array1<f64>) -> Result<(), ExportError>;
}

/// Writes the arrays as headerless CSV files into a directory.
#[derive(Debug, Clone)]
pub struct CsvArraySink {
    dir: PathBuf,
}

impl CsvArraySink {
    /// Sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write_rows<I>(path: &Path, rows: I) -> Result<(), ExportError>
    where
        I: Iterator<Item = Vec<f64>>,
    {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
        for row in rows {
            writer.write_record(row.iter().map(|value| value.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl ArraySink for CsvArraySink {
    fn persist(&self, features: &Array2<f64>, target: &Array1<f64>) -> Result<(), ExportError> {
        Self::write_rows(
            &self.dir.join(X_FILENAME),
            features.rows().into_iter().map(|row| row.to_vec()),
        )?;
        Self::write_rows(
            &self.dir.join(Y_FILENAME),
            target.iter().map(|value| vec![*value]),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_rows_written_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvArraySink::new(dir.path());

        let features = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let target = arr1(&[10.0, 20.0]);
        sink.persist(&features, &target).unwrap();

        let x = std::fs::read_to_string(dir.path().join(X_FILENAME)).unwrap();
        let y = std::fs::read_to_string(dir.path().join(Y_FILENAME)).unwrap();
        assert_eq!(x.lines().collect::<Vec<_>>(), ["1,2", "3,4"]);
        assert_eq!(y.lines().collect::<Vec<_>>(), ["10", "20"]);
    }
}
