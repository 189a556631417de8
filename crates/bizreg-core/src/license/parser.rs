//! Business-license parser composing the per-field rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::{
    extract_address, extract_business_item, extract_business_number, extract_business_type,
    extract_company_name, extract_established_at, extract_representative,
};

/// Structured fields extracted from a business-registration certificate.
///
/// Every field is independently optional; a missing label leaves its field
/// absent without affecting the others. String fields are trimmed with
/// internal whitespace runs collapsed. Serialized with the camelCase names the
/// registration form consumes; `establishedAt` serializes as `null` when
/// absent so the date input can be cleared client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLicense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Registration number in the fixed `DDD-DD-DDDDD` shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_number: Option<String>,

    /// 2-4 Hangul syllables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_item: Option<String>,

    /// Date of opening/establishment, `YYYY-MM-DD` on the wire.
    pub established_at: Option<NaiveDate>,
}

impl ParsedLicense {
    /// True when no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.business_number.is_none()
            && self.representative_name.is_none()
            && self.address.is_none()
            && self.business_type.is_none()
            && self.business_item.is_none()
            && self.established_at.is_none()
    }
}

/// Parse raw license text into structured fields.
///
/// Pure and total: no input errors, an unmatched field is simply absent.
/// Misses are logged at debug level only.
pub fn parse_license_text(text: &str) -> ParsedLicense {
    let mut result = ParsedLicense::default();

    result.company_name = extract_company_name(text);
    if result.company_name.is_none() {
        debug!("company name label not found");
    }

    result.representative_name = extract_representative(text);
    if result.representative_name.is_none() {
        debug!("representative name not found");
    }

    result.business_number = extract_business_number(text);
    if result.business_number.is_none() {
        debug!("business registration number not found");
    }

    result.address = extract_address(text);
    if result.address.is_none() {
        debug!("place of business not found");
    }

    result.business_type = extract_business_type(text);
    if result.business_type.is_none() {
        debug!("business type not found");
    }

    result.business_item = extract_business_item(text);
    if result.business_item.is_none() {
        debug!("business item not found");
    }

    result.established_at = extract_established_at(text);
    if result.established_at.is_none() {
        debug!("establishment date not found");
    }

    result
}
