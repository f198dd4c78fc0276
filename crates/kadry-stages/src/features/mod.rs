//! Derived-feature construction and categorical encoding.

mod encode;
pub mod parse;
pub mod role;

use encode::one_hot_labels;
use kadry::schema::{
    AUTO_COLUMN, CITY_COLUMN, EMPLOYMENT_COLUMN, EXPERIENCE_COLUMN, GENDER_AGE_COLUMN,
    POSITION_COLUMN, SCHEDULE_COLUMN, UNUSED_COLUMNS,
};
use kadry::{Result, Stage};
use parse::{parse_age, parse_experience_years, parse_gender};
use polars::prelude::*;
use role::RoleGroup;

/// Sentinel for unrecognized gender text.
const GENDER_UNKNOWN: f64 = -1.0;

/// Plausible age bounds in years.
const AGE_BOUNDS: (f64, f64) = (18.0, 75.0);

/// Plausible work-experience bounds in years.
const EXPERIENCE_BOUNDS: (f64, f64) = (0.0, 45.0);

/// English phrase variants of the employment-type column mapped to the
/// domestic canonical categories.
const EMPLOYMENT_CANON: [(&str, &str); 5] = [
    ("full time", "полная занятость"),
    ("part time", "частичная занятость"),
    ("volunteering", "волонтерство"),
    ("work placement", "стажировка"),
    ("project work", "проектная работа"),
];

/// English phrase variants of the work-schedule column mapped to the
/// domestic canonical categories.
const SCHEDULE_CANON: [(&str, &str); 5] = [
    ("rotation based work", "вахтовый метод"),
    ("flexible schedule", "гибкий график"),
    ("shift schedule", "сменный график"),
    ("full day", "полный день"),
    ("remote working", "удаленная работа"),
];

/// Derives structured features (gender, age, city, employment type,
/// schedule, role group, experience years, car ownership) from the
/// free-form columns and one-hot-encodes the categoricals.
///
/// Raw textual source columns are dropped once their derived features
/// are in place; every unrecognized input has a silent fallback (a
/// sentinel, a median, or an "other" bucket). Row count and alignment
/// are preserved throughout.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureEncoder {
    verbose: bool,
}

impl FeatureEncoder {
    /// Encoder with diagnostics disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable progress and summary diagnostics on stdout. Purely
    /// observational, no effect on the returned table.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn print_summary(df: &DataFrame) {
        println!("Encoding finished\n");
        println!("Dataset size: {} rows, {} columns", df.height(), df.width());
        println!("\nPreview:\n{}", df.head(Some(5)));

        for (column, label) in [("age", "Age"), ("years_exp", "Experience")] {
            if let Ok(series) = df.column(column) {
                let series = series.as_materialized_series();
                if let (Some(mean), Some(std)) = (series.mean(), series.std(1)) {
                    println!("{label}: {mean:.1} ± {std:.1} years");
                }
            }
        }
        println!("Feature count: {}\n", df.width());
    }
}

/// Canonicalize a trimmed category value via a variant table; values
/// outside the table pass through unchanged.
fn canonicalize(raw: &str, table: &[(&str, &str)]) -> String {
    let trimmed = raw.trim();
    table
        .iter()
        .find(|(variant, _)| *variant == trimmed)
        .map_or_else(|| trimmed.to_string(), |(_, canon)| (*canon).to_string())
}

/// Bucket the "City, <other info>" composite into MSK/SPB/Other.
fn canonical_city(raw: &str) -> &'static str {
    let city = raw.split(',').next().unwrap_or_default().trim();
    match city {
        "Москва" | "Moscow" => "MSK",
        "Санкт-Петербург" | "Saint Petersburg" => "SPB",
        _ => "Other",
    }
}

/// Canonical car-ownership tokens for the two known literal values.
fn canonical_auto(raw: &str) -> &str {
    match raw {
        "Не указано" => "Unknown",
        "Имеется собственный автомобиль" => "HasAuto",
        other => other,
    }
}

/// Gender flag and age, both from the composite gender/age column.
///
/// The gender miss sentinel is -1.0 so the column is always a float,
/// never null; ages are clipped to plausible bounds before the median
/// of the successfully parsed values fills the gaps. The one-hot
/// expansion of gender is kept alongside the numeric flag.
fn encode_gender_age(mut df: DataFrame) -> Result<DataFrame> {
    let source = df.column(GENDER_AGE_COLUMN)?.as_materialized_series().clone();
    let ca = source.str()?;

    let gender: Vec<f64> = ca
        .iter()
        .map(|v| {
            v.and_then(parse_gender)
                .map_or(GENDER_UNKNOWN, |g| g as f64)
        })
        .collect();

    let ages: Float64Chunked = ca
        .iter()
        .map(|v| {
            v.and_then(parse_age)
                .map(|age| age.clamp(AGE_BOUNDS.0, AGE_BOUNDS.1))
        })
        .collect();
    let median = ages.median();
    let ages = ages.apply(|v| v.or(median)).with_name("age".into());

    df.with_column(Float64Chunked::from_vec("gender".into(), gender.clone()).into_series())?;
    df.with_column(ages.into_series())?;
    df = df.drop(GENDER_AGE_COLUMN)?;

    let labels: Vec<Option<String>> = gender.iter().map(|g| Some(format!("{g:.0}"))).collect();
    one_hot_labels(&mut df, &labels, Some("gender"), false)?;
    Ok(df)
}

fn encode_city(mut df: DataFrame) -> Result<DataFrame> {
    let source = df.column(CITY_COLUMN)?.as_materialized_series().clone();
    let labels: Vec<Option<String>> = source
        .str()?
        .iter()
        .map(|v| v.map(|s| canonical_city(s).to_string()))
        .collect();
    one_hot_labels(&mut df, &labels, Some("City"), false)?;
    df = df.drop(CITY_COLUMN)?;
    Ok(df)
}

/// Unify English phrase variants with their canonical domestic
/// category, then one-hot the unified set and drop the source column.
fn encode_canonical(mut df: DataFrame, column: &str, table: &[(&str, &str)]) -> Result<DataFrame> {
    let source = df.column(column)?.as_materialized_series().clone();
    let labels: Vec<Option<String>> = source
        .str()?
        .iter()
        .map(|v| v.map(|s| canonicalize(s, table)))
        .collect();
    one_hot_labels(&mut df, &labels, None, false)?;
    df = df.drop(column)?;
    Ok(df)
}

/// Role-group classification with one reference category dropped to
/// avoid the encoding redundancy.
fn encode_role(mut df: DataFrame) -> Result<DataFrame> {
    let source = df.column(POSITION_COLUMN)?.as_materialized_series().clone();
    let labels: Vec<Option<String>> = source
        .str()?
        .iter()
        .map(|v| Some(RoleGroup::classify(v.unwrap_or_default()).name().to_string()))
        .collect();
    one_hot_labels(&mut df, &labels, Some("role_group"), true)?;
    df = df.drop(POSITION_COLUMN)?;
    Ok(df)
}

/// Experience in fractional years; unparsed values get the median of
/// the parsed ones, then the whole column is clipped to bounds.
fn encode_experience(mut df: DataFrame) -> Result<DataFrame> {
    let source = df.column(EXPERIENCE_COLUMN)?.as_materialized_series().clone();
    let parsed: Float64Chunked = source
        .str()?
        .iter()
        .map(|v| v.and_then(parse_experience_years))
        .collect();
    let median = parsed.median();
    let filled = parsed
        .apply(|v| {
            v.or(median)
                .map(|years| years.clamp(EXPERIENCE_BOUNDS.0, EXPERIENCE_BOUNDS.1))
        })
        .with_name("years_exp".into());

    df.with_column(filled.into_series())?;
    df = df.drop(EXPERIENCE_COLUMN)?;
    Ok(df)
}

fn encode_auto(mut df: DataFrame) -> Result<DataFrame> {
    let source = df.column(AUTO_COLUMN)?.as_materialized_series().clone();
    let labels: Vec<Option<String>> = source
        .str()?
        .iter()
        .map(|v| v.map(|s| canonical_auto(s).to_string()))
        .collect();
    one_hot_labels(&mut df, &labels, Some("Auto"), false)?;
    df = df.drop(AUTO_COLUMN)?;
    Ok(df)
}

/// Drop the raw columns known to carry unstructured or unused text;
/// absence is not an error.
fn drop_unused(mut df: DataFrame) -> Result<DataFrame> {
    for column in UNUSED_COLUMNS {
        if df.get_column_names_str().contains(&column) {
            df = df.drop(column)?;
        }
    }
    Ok(df)
}

impl Stage for FeatureEncoder {
    fn name(&self) -> &'static str {
        "feature-encoder"
    }

    fn process(&self, df: DataFrame) -> Result<DataFrame> {
        if self.verbose {
            println!("Encoding features...");
        }

        let df = encode_gender_age(df)?;
        let df = encode_city(df)?;
        let df = encode_canonical(df, EMPLOYMENT_COLUMN, &EMPLOYMENT_CANON)?;
        let df = encode_canonical(df, SCHEDULE_COLUMN, &SCHEDULE_CANON)?;
        let df = encode_role(df)?;
        let df = encode_experience(df)?;
        let df = encode_auto(df)?;
        let df = drop_unused(df)?;

        if self.verbose {
            Self::print_summary(&df);
        }
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn column_f64(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
        df.column(name)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .collect()
    }

    fn encoder_input() -> DataFrame {
        df!(
            GENDER_AGE_COLUMN => ["Мужчина, 35 лет", "Female, 28 years", "кто-то"],
            CITY_COLUMN => ["Москва, м. Арбатская", "Киев", "Saint Petersburg"],
            EMPLOYMENT_COLUMN => ["полная занятость", "full time", "part time"],
            SCHEDULE_COLUMN => ["полный день", "remote working", "полный день"],
            POSITION_COLUMN => ["Python developer", "Руководитель отдела", "Библиотекарь"],
            EXPERIENCE_COLUMN => ["Опыт работы 5 лет 6 месяцев", "3 года", "7 месяцев"],
            AUTO_COLUMN => ["Имеется собственный автомобиль", "Не указано", "Не указано"],
            "ЗП" => [75_500.0f64, 50_000.0, 44_600.0],
            "Образование и ВУЗ" => ["высшее", "высшее", "среднее"],
        )
        .unwrap()
    }

    #[test]
    fn test_gender_and_age_derivation() {
        let out = FeatureEncoder::new().process(encoder_input()).unwrap();

        assert_eq!(
            column_f64(&out, "gender"),
            [Some(1.0), Some(0.0), Some(-1.0)]
        );
        // Unparsed age takes the median of the two parsed ones.
        assert_eq!(
            column_f64(&out, "age"),
            [Some(35.0), Some(28.0), Some(31.5)]
        );
        assert_eq!(
            column_f64(&out, "gender_1"),
            [Some(1.0), Some(0.0), Some(0.0)]
        );
        assert_eq!(
            column_f64(&out, "gender_-1"),
            [Some(0.0), Some(0.0), Some(1.0)]
        );
    }

    #[test]
    fn test_city_buckets() {
        let out = FeatureEncoder::new().process(encoder_input()).unwrap();

        assert_eq!(
            column_f64(&out, "City_MSK"),
            [Some(1.0), Some(0.0), Some(0.0)]
        );
        assert_eq!(
            column_f64(&out, "City_Other"),
            [Some(0.0), Some(1.0), Some(0.0)]
        );
        assert_eq!(
            column_f64(&out, "City_SPB"),
            [Some(0.0), Some(0.0), Some(1.0)]
        );
        assert!(!out.get_column_names_str().contains(&CITY_COLUMN));
    }

    #[test]
    fn test_employment_and_schedule_unified() {
        let out = FeatureEncoder::new().process(encoder_input()).unwrap();

        // "full time" folds into the domestic canonical category.
        assert_eq!(
            column_f64(&out, "полная занятость"),
            [Some(1.0), Some(1.0), Some(0.0)]
        );
        assert_eq!(
            column_f64(&out, "частичная занятость"),
            [Some(0.0), Some(0.0), Some(1.0)]
        );
        assert_eq!(
            column_f64(&out, "удаленная работа"),
            [Some(0.0), Some(1.0), Some(0.0)]
        );
    }

    #[test]
    fn test_role_group_reference_category_dropped() {
        let out = FeatureEncoder::new().process(encoder_input()).unwrap();

        // Observed buckets dev/mgr/other sorted: dev is the reference.
        let names = out.get_column_names_str();
        assert!(!names.contains(&"role_group_dev"));
        assert_eq!(
            column_f64(&out, "role_group_mgr"),
            [Some(0.0), Some(1.0), Some(0.0)]
        );
        assert_eq!(
            column_f64(&out, "role_group_other"),
            [Some(0.0), Some(0.0), Some(1.0)]
        );
    }

    #[test]
    fn test_experience_parsing_and_clipping() {
        let out = FeatureEncoder::new().process(encoder_input()).unwrap();

        let years = column_f64(&out, "years_exp");
        assert_relative_eq!(years[0].unwrap(), 5.5);
        assert_relative_eq!(years[1].unwrap(), 3.0);
        assert_relative_eq!(years[2].unwrap(), 7.0 / 12.0);
    }

    #[test]
    fn test_auto_ownership_and_unused_columns() {
        let out = FeatureEncoder::new().process(encoder_input()).unwrap();

        assert_eq!(
            column_f64(&out, "Auto_HasAuto"),
            [Some(1.0), Some(0.0), Some(0.0)]
        );
        assert_eq!(
            column_f64(&out, "Auto_Unknown"),
            [Some(0.0), Some(1.0), Some(1.0)]
        );
        assert!(!out.get_column_names_str().contains(&"Образование и ВУЗ"));
    }

    #[test]
    fn test_row_count_and_target_preserved() {
        let input = encoder_input();
        let rows = input.height();
        let out = FeatureEncoder::new().process(input).unwrap();

        assert_eq!(out.height(), rows);
        assert!(out.get_column_names_str().contains(&"ЗП"));
    }

    #[test]
    fn test_age_clipped_to_bounds() {
        let mut input = encoder_input();
        input
            .with_column(Series::new(
                GENDER_AGE_COLUMN.into(),
                ["Мужчина, 16 лет", "Женщина, 99 лет", "Мужчина, 40 лет"],
            ))
            .unwrap();

        let out = FeatureEncoder::new().process(input).unwrap();
        assert_eq!(
            column_f64(&out, "age"),
            [Some(18.0), Some(75.0), Some(40.0)]
        );
    }
}
