//! Business type (업태) and business item (종목) extraction.

use super::patterns::{BUSINESS_ITEM, BUSINESS_TYPE};
use regex::Regex;

/// Extract the business type from license text.
pub fn extract_business_type(text: &str) -> Option<String> {
    labeled_line(&BUSINESS_TYPE, text)
}

/// Extract the business item from license text.
pub fn extract_business_item(text: &str) -> Option<String> {
    labeled_line(&BUSINESS_ITEM, text)
}

fn labeled_line(pattern: &Regex, text: &str) -> Option<String> {
    pattern.captures(text).map(|caps| caps[1].trim().to_string())
}
