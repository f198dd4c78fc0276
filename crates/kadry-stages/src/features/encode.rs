//! Deterministic one-hot encoding helpers.

use kadry::Result;
use polars::prelude::*;
use std::collections::BTreeSet;

/// Append 0.0/1.0 indicator columns for `labels` to `df`.
///
/// The category universe is the sorted set of distinct labels, so the
/// produced schema is stable across runs over the same universe. Each
/// row has exactly one indicator set, or none when its label is `None`.
/// With `prefix` the columns are named `<prefix>_<category>`, otherwise
/// the bare category name is used. `drop_first` removes the first
/// sorted category, leaving it as the implicit reference level.
pub(crate) fn one_hot_labels(
    df: &mut DataFrame,
    labels: &[Option<String>],
    prefix: Option<&str>,
    drop_first: bool,
) -> Result<()> {
    let categories: BTreeSet<&String> = labels.iter().flatten().collect();
    let skip = usize::from(drop_first);

    for category in categories.into_iter().skip(skip) {
        let name = match prefix {
            Some(prefix) => format!("{prefix}_{category}"),
            None => category.clone(),
        };
        let indicators: Vec<f64> = labels
            .iter()
            .map(|label| match label {
                Some(label) if label == category => 1.0,
                _ => 0.0,
            })
            .collect();
        df.with_column(Float64Chunked::from_vec(name.as_str().into(), indicators).into_series())?;
    }
    Ok(())
}
