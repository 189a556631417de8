//! Place-of-business (address) extraction.

use super::patterns::ADDRESS;
use super::FieldExtractor;

/// Address extractor: labeled capture to end of line.
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        ADDRESS
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ADDRESS
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }
}

/// Extract the place of business from license text.
pub fn extract_address(text: &str) -> Option<String> {
    AddressExtractor::new().extract(text)
}
