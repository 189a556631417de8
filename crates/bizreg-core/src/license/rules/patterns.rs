//! Regex patterns for Korean business-registration certificates.
//!
//! The label vocabulary is fixed by the document format and must stay verbatim:
//! 상호/법인명 (trade name), 대표자/성명 (representative), 등록번호 (registration
//! number), 사업장소재지/소재지 (place of business), 업태 (business type),
//! 종목 (business item), 개업연월일/설립일 (date of opening/establishment).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Trade-name label at the start of a single trimmed line. Matched
    // line-by-line; the label token itself may carry internal spaces (상 호).
    pub static ref COMPANY_NAME_LINE: Regex = Regex::new(
        r"(상\s*호|법인명(?:\(상호\)|\(단체명\))?|상호\(법인명\))\s*[:：]?\s*(.+)$"
    ).unwrap();

    // Looser whole-text fallback, only consulted when no line matched.
    pub static ref COMPANY_NAME_FALLBACK: Regex = Regex::new(
        r"상호\s*[:：]?\s*([^\n\r]+)"
    ).unwrap();

    // Representative label (letter-spacing tolerated) followed by a
    // 2-4 syllable Hangul name. Applied to the flattened view.
    pub static ref REPRESENTATIVE: Regex = Regex::new(
        r"(대표자|대\s*표\s*자|성명|성\s*명)\s*[:：]?\s*([가-힣]{2,4})"
    ).unwrap();

    // Business registration number: exactly 3-2-5 digits.
    pub static ref BUSINESS_NUMBER: Regex = Regex::new(
        r"(?:등록번호|사업자등록번호)\s*[:：]?\s*(\d{3}-\d{2}-\d{5})"
    ).unwrap();

    // Place of business, captured to end of line.
    pub static ref ADDRESS: Regex = Regex::new(
        r"(?:사업장\s*소재지|소재지)\s*[:：]?\s*([^\n\r]+)"
    ).unwrap();

    // Business type (업태) and business item (종목) are distinct
    // single-purpose patterns, not one shared rule.
    pub static ref BUSINESS_TYPE: Regex = Regex::new(
        r"업태\s*[:：]?\s*([^\n\r]+)"
    ).unwrap();

    pub static ref BUSINESS_ITEM: Regex = Regex::new(
        r"종목\s*[:：]?\s*([^\n\r]+)"
    ).unwrap();

    // Date of opening/establishment in Korean date notation, applied to the
    // flattened view with arbitrary spacing around the year/month/day units.
    pub static ref ESTABLISHED_DATE: Regex = Regex::new(
        r"(?:개업연월일|개업일|설립연월일|설립일)\s*[:：]?\s*(\d{4})\s*년\s*(\d{1,2})\s*월\s*(\d{1,2})\s*일"
    ).unwrap();
}
