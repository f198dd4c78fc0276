//! Salary normalization to a uniform ruble amount.

use kadry::{Result, Stage};
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;

static AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+[.,]?\d*").expect("valid regex"));
static CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-zА-Яа-я]+").expect("valid regex"));

/// Ruble conversion rate for a lower-cased currency token.
///
/// Unknown tokens fall back to rate 1.0 and the amount passes through
/// unconverted.
pub fn rub_rate(code: &str) -> f64 {
    match code {
        "azn" => 44.41,
        "byn" => 26.67,
        "eur" => 89.20,
        "kgs" => 0.86,
        "kzt" => 0.15,
        "rub" => 1.0,
        "uah" => 1.75,
        "usd" => 75.50,
        _ => 1.0,
    }
}

/// Parse one salary cell into a ruble amount.
///
/// The first decimal (or comma-decimal) substring is the amount and the
/// first alphabetic run, lower-cased, is the currency token, defaulting
/// to rubles when absent. The comma is treated as a decimal separator,
/// so thousands-grouped numbers are not handled.
pub fn parse_salary(text: &str) -> Option<f64> {
    let amount: f64 = AMOUNT.find(text)?.as_str().replace(',', ".").parse().ok()?;
    let rate = CURRENCY
        .find(text)
        .map_or(1.0, |m| rub_rate(&m.as_str().to_lowercase()));
    Some(amount * rate)
}

/// Converts the mixed-currency salary column to uniform rubles in place.
///
/// Cells that contain no numeric amount become null and are filled by a
/// later stage; unparseable currencies are not an error.
#[derive(Debug, Clone)]
pub struct SalaryNormalizer {
    column: String,
}

impl SalaryNormalizer {
    /// Normalize `column` in place.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Stage for SalaryNormalizer {
    fn name(&self) -> &'static str {
        "salary-normalizer"
    }

    fn process(&self, mut df: DataFrame) -> Result<DataFrame> {
        let series = df
            .column(&self.column)?
            .as_materialized_series()
            .cast(&DataType::String)?;
        let converted: Float64Chunked = series
            .str()?
            .iter()
            .map(|v| v.and_then(parse_salary))
            .collect();
        df.with_column(converted.with_name(self.column.as_str().into()).into_series())?;
        Ok(df)
    }
}
