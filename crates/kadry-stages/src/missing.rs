//! Missing value imputation.

use kadry::schema::MISSING_TEXT;
use kadry::{Result, Stage};
use polars::prelude::*;

/// Fills remaining nulls column by column: numeric columns with their
/// own median (computed over the already-transformed data), text
/// columns with the `"unknown"` sentinel.
///
/// Fills are per-column and independent, so column order does not
/// affect the outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct MissingValueFiller;

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::Float32
            | DataType::Float64
    )
}

impl Stage for MissingValueFiller {
    fn name(&self) -> &'static str {
        "missing-filler"
    }

    fn process(&self, df: DataFrame) -> Result<DataFrame> {
        let mut fills = Vec::new();
        for column in df.get_columns() {
            let name = column.name().as_str();
            match column.dtype() {
                dtype if is_numeric(dtype) => {
                    fills.push(col(name).fill_null(col(name).median()));
                }
                DataType::String => fills.push(col(name).fill_null(lit(MISSING_TEXT))),
                _ => {}
            }
        }
        Ok(df.lazy().with_columns(fills).collect()?)
    }
}
