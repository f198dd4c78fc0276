//! IQR-based outlier clipping.

use kadry::{Result, Stage};
use polars::prelude::*;

/// Clips one numeric column to `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
///
/// Quartiles use linear interpolation between order statistics. Values
/// outside the bounds are clamped in place, never removed, so the row
/// count is unaffected. Nulls are ignored by the quantile computation
/// and pass through untouched.
#[derive(Debug, Clone)]
pub struct OutlierClipper {
    column: String,
}

impl OutlierClipper {
    /// Clip `column` in place.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Stage for OutlierClipper {
    fn name(&self) -> &'static str {
        "outlier-clipper"
    }

    fn process(&self, mut df: DataFrame) -> Result<DataFrame> {
        let series = df
            .column(&self.column)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let ca = series.f64()?;

        let q1 = ca.quantile(0.25, QuantileMethod::Linear)?;
        let q3 = ca.quantile(0.75, QuantileMethod::Linear)?;
        if let (Some(q1), Some(q3)) = (q1, q3) {
            let iqr = q3 - q1;
            let (low, high) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
            let clipped = ca
                .apply_values(|v| v.clamp(low, high))
                .with_name(self.column.as_str().into());
            df.with_column(clipped.into_series())?;
        }
        Ok(df)
    }
}
