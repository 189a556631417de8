//! Representative name extraction.

use super::patterns::REPRESENTATIVE;
use super::FieldExtractor;
use crate::license::text::flatten;

/// Representative name extractor.
///
/// Searches the flattened view so a label broken across OCR lines still
/// matches. Only 2-4 consecutive Hangul syllables are accepted; longer or
/// mixed-script names are a known boundary limitation of the document format
/// rules, not an error.
pub struct RepresentativeExtractor;

impl RepresentativeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RepresentativeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for RepresentativeExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let flat = flatten(text);
        REPRESENTATIVE
            .captures(&flat)
            .map(|caps| caps[2].trim().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let flat = flatten(text);
        REPRESENTATIVE
            .captures_iter(&flat)
            .map(|caps| caps[2].trim().to_string())
            .collect()
    }
}

/// Extract the representative name from license text.
pub fn extract_representative(text: &str) -> Option<String> {
    RepresentativeExtractor::new().extract(text)
}
