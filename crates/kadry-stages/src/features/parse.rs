//! Pure free-text parsers used by the feature encoder.
//!
//! Each parser takes a text cell and returns an optional value; a miss
//! is never an error, the encoder substitutes a sentinel or a median.

use once_cell::sync::Lazy;
use regex::Regex;

static AGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3})(?:[.,]\d+)?\s*(?:лет|год|года|years?)").expect("valid regex"));

static EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:опыт работы\s*)?(\d+)\s*(?:лет|год|года|г\.|years?)(?:\s+(\d+)\s*(?:месяц|месяца|месяцев|мес\.|months?))?",
    )
    .expect("valid regex")
});

static MONTHS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:месяц|месяца|месяцев|мес\.|months?)").expect("valid regex"));

/// Extract a gender flag from the composite gender/age text: 1 for
/// male, 0 for female.
///
/// Female tokens are checked first so "Female" is never caught by its
/// "male" substring.
pub fn parse_gender(text: &str) -> Option<i64> {
    let text = text.to_lowercase();
    if text.contains("жен") || text.contains("female") {
        return Some(0);
    }
    if text.contains("муж") || text.contains("male") {
        return Some(1);
    }
    None
}

/// Extract an age in years from the composite gender/age text.
pub fn parse_age(text: &str) -> Option<f64> {
    let lowered = text.to_lowercase();
    let caps = AGE.captures(&lowered)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Extract total work experience in fractional years.
///
/// Tries "<N> years [<M> months]" first (fractional years = N + M/12),
/// falling back to a bare "<M> months" when the year pattern does not
/// match.
pub fn parse_experience_years(text: &str) -> Option<f64> {
    let text = text.to_lowercase();
    if let Some(caps) = EXPERIENCE.captures(&text) {
        let years: f64 = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0);
        let months: f64 = caps
            .get(2)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0.0);
        return Some(years + months / 12.0);
    }

    let caps = MONTHS_ONLY.captures(&text)?;
    let months: f64 = caps.get(1)?.as_str().parse().ok()?;
    Some(months / 12.0)
}
