//! Business registration number extraction.

use super::patterns::BUSINESS_NUMBER;
use super::FieldExtractor;

/// Business registration number extractor.
///
/// Whole-text search for a labeled number in the fixed 3-2-5 digit shape.
/// Anything else (wrong grouping, missing dashes) is left unmatched.
pub struct BusinessNumberExtractor;

impl BusinessNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BusinessNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BusinessNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        BUSINESS_NUMBER
            .captures(text)
            .map(|caps| caps[1].to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        BUSINESS_NUMBER
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Extract the business registration number from license text.
pub fn extract_business_number(text: &str) -> Option<String> {
    BusinessNumberExtractor::new().extract(text)
}
