//! Final split into feature matrix and target vector.

use crate::sink::{ArraySink, CsvArraySink};
use kadry::{Result, Stage};
use ndarray::Array1;
use polars::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

/// Splits the final table into a feature matrix (every column except
/// the target) and the target vector, and hands both to the persistence
/// sink.
///
/// The table itself is returned unchanged: the export is a side effect,
/// not a transform, which keeps the stage contract symmetric with the
/// rest of the chain.
pub struct ArrayExporter {
    target_column: String,
    sink: Box<dyn ArraySink>,
}

impl ArrayExporter {
    /// Export via a custom sink.
    pub fn new(sink: impl ArraySink + 'static, target_column: impl Into<String>) -> Self {
        Self {
            target_column: target_column.into(),
            sink: Box::new(sink),
        }
    }

    /// Export via the default CSV sink into the source file's
    /// containing directory.
    pub fn beside_source(source: &Path, target_column: impl Into<String>) -> Self {
        let dir = source
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self::new(CsvArraySink::new(dir), target_column)
    }
}

impl Stage for ArrayExporter {
    fn name(&self) -> &'static str {
        "array-exporter"
    }

    fn process(&self, df: DataFrame) -> Result<DataFrame> {
        let features = df.drop(&self.target_column)?;
        let features = features.to_ndarray::<Float64Type>(IndexOrder::C)?;

        let target = df
            .column(&self.target_column)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let target: Vec<f64> = target
            .f64()?
            .iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();
        let target = Array1::from_vec(target);

        self.sink.persist(&features, &target)?;
        Ok(df)
    }
}

impl fmt::Debug for ArrayExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayExporter")
            .field("target_column", &self.target_column)
            .finish_non_exhaustive()
    }
}
