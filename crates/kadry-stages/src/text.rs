//! Whitespace and control-character cleanup for text columns.

use kadry::{Result, Stage};
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;

static CONTROL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n\t]+").expect("valid regex"));
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapses whitespace and strips control characters in every string
/// column. Non-textual columns pass through unchanged; no column is
/// added or removed. Idempotent: cleaning already-clean text is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

/// Clean one text cell: strip BOM, map non-breaking spaces to plain
/// spaces, collapse control-character and whitespace runs, trim.
fn clean(text: &str) -> String {
    let text = text.replace('\u{feff}', "").replace('\u{a0}', " ");
    let text = CONTROL_RUN.replace_all(&text, " ");
    SPACE_RUN.replace_all(&text, " ").trim().to_string()
}

impl Stage for TextNormalizer {
    fn name(&self) -> &'static str {
        "text-normalizer"
    }

    fn process(&self, mut df: DataFrame) -> Result<DataFrame> {
        for name in df.get_column_names_owned() {
            let column = df.column(name.as_str())?;
            if column.dtype() != &DataType::String {
                continue;
            }
            let ca = column.as_materialized_series().str()?;
            let cleaned: StringChunked = ca.iter().map(|v| v.map(clean)).collect();
            df.with_column(cleaned.with_name(name).into_series())?;
        }
        Ok(df)
    }
}
