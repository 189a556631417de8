//! Company (trade) name extraction.

use super::patterns::{COMPANY_NAME_FALLBACK, COMPANY_NAME_LINE};
use super::FieldExtractor;
use crate::license::text::{clean_lines, collapse_whitespace, strip_parentheses};

/// Company name extractor.
///
/// Primary strategy scans line by line for a trade-name label and takes the
/// first hit. Only when no line matches at all does the looser whole-text
/// fallback run. The two patterns intentionally stay separate and may disagree
/// on ambiguous input; the reference behavior is preserved as-is.
pub struct CompanyNameExtractor;

impl CompanyNameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompanyNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CompanyNameExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for line in clean_lines(text) {
            if let Some(caps) = COMPANY_NAME_LINE.captures(line) {
                if let Some(value) = clean_name(&caps[2]) {
                    return Some(value);
                }
            }
        }

        COMPANY_NAME_FALLBACK
            .captures(text)
            .and_then(|caps| clean_name(&caps[1]))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        clean_lines(text)
            .filter_map(|line| COMPANY_NAME_LINE.captures(line))
            .filter_map(|caps| clean_name(&caps[2]))
            .collect()
    }
}

/// Extract the company name from license text.
pub fn extract_company_name(text: &str) -> Option<String> {
    CompanyNameExtractor::new().extract(text)
}

/// Strip parentheses (the "(주)" marker among them), collapse whitespace, trim.
fn clean_name(raw: &str) -> Option<String> {
    let cleaned = collapse_whitespace(&strip_parentheses(raw));
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_labeled_line() {
        let text = "사업자등록증\n상호: (주)테스트컴퍼니\n대표자: 홍길동";
        assert_eq!(
            extract_company_name(text),
            Some("주테스트컴퍼니".to_string())
        );
    }

    #[test]
    fn test_corporate_name_labels() {
        assert_eq!(
            extract_company_name("법인명(단체명): 한국상사"),
            Some("한국상사".to_string())
        );
        assert_eq!(
            extract_company_name("법인명(상호): 대한무역"),
            Some("대한무역".to_string())
        );
    }

    #[test]
    fn test_letter_spaced_label() {
        assert_eq!(
            extract_company_name("상 호 : 열린가게"),
            Some("열린가게".to_string())
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(
            extract_company_name("상호:  테스트   컴퍼니  "),
            Some("테스트 컴퍼니".to_string())
        );
    }

    #[test]
    fn test_first_line_wins() {
        let text = "상호: 첫번째\n상호: 두번째";
        assert_eq!(extract_company_name(text), Some("첫번째".to_string()));
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(extract_company_name("등록번호: 123-45-67890"), None);
        assert_eq!(extract_company_name(""), None);
    }

    #[test]
    fn test_extract_all() {
        let text = "상호: 첫번째\n법인명: 두번째";
        let all = CompanyNameExtractor::new().extract_all(text);
        assert_eq!(all, vec!["첫번째".to_string(), "두번째".to_string()]);
    }
}
