//! Establishment (opening) date extraction.

use chrono::NaiveDate;

use super::patterns::ESTABLISHED_DATE;
use super::FieldExtractor;
use crate::license::text::flatten;

/// Establishment date extractor.
///
/// Searches the flattened view for a date in Korean notation
/// (`YYYY년 M월 D일`, arbitrary internal spacing). The result carries
/// zero-padded `YYYY-MM-DD` through its serde representation.
pub struct EstablishedExtractor;

impl EstablishedExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EstablishedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EstablishedExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let flat = flatten(text);
        ESTABLISHED_DATE.captures(&flat).and_then(date_from_caps)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let flat = flatten(text);
        ESTABLISHED_DATE
            .captures_iter(&flat)
            .filter_map(date_from_caps)
            .collect()
    }
}

fn date_from_caps(caps: regex::Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Extract the establishment date from license text.
pub fn extract_established_at(text: &str) -> Option<NaiveDate> {
    EstablishedExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_digit_month_day_zero_padded() {
        let date = extract_established_at("개업연월일 2020년 3월 5일").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 5).unwrap());
        assert_eq!(date.to_string(), "2020-03-05");
    }

    #[test]
    fn test_label_variants() {
        for label in ["개업연월일", "개업일", "설립연월일", "설립일"] {
            let text = format!("{}: 2019년 12월 31일", label);
            assert_eq!(
                extract_established_at(&text),
                NaiveDate::from_ymd_opt(2019, 12, 31),
                "label {label}"
            );
        }
    }

    #[test]
    fn test_spacing_tolerated_across_lines() {
        assert_eq!(
            extract_established_at("개업연월일\n2021 년  7 월 1 일"),
            NaiveDate::from_ymd_opt(2021, 7, 1)
        );
    }

    #[test]
    fn test_invalid_calendar_date_absent() {
        assert_eq!(extract_established_at("개업일: 2020년 13월 1일"), None);
    }

    #[test]
    fn test_missing_label_absent() {
        assert_eq!(extract_established_at("2020년 3월 5일"), None);
    }
}
