//! Company (business registration) record models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::license::ParsedLicense;

/// A persisted company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// UUID assigned at creation.
    pub id: String,

    pub company_name: String,
    pub business_number: String,
    pub representative_name: String,
    pub address: String,
    pub business_type: String,
    pub business_item: String,

    /// Credit rating from an attached credit report, free-form.
    pub credit_rating: String,
    pub risk_rating: String,
    pub memo: String,

    /// Date of establishment; `null` when unknown.
    pub established_at: Option<NaiveDate>,

    /// Outstanding-loan status, free-form.
    pub loan_status: String,

    /// Web path of the attached business-license file, if any.
    pub business_license_path: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a company.
///
/// Every field defaults so a registration form can submit only what it has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyInput {
    pub company_name: String,
    pub business_number: String,
    pub representative_name: String,
    pub address: String,
    pub business_type: String,
    pub business_item: String,
    pub credit_rating: String,
    pub risk_rating: String,
    pub memo: String,
    pub established_at: Option<NaiveDate>,
    pub loan_status: String,
    pub business_license_path: Option<String>,
}

impl CompanyInput {
    /// Pre-fill empty fields from extracted license data. Values already
    /// typed into the form are never overwritten.
    pub fn merge_parsed(&mut self, parsed: &ParsedLicense) {
        fn fill(slot: &mut String, value: &Option<String>) {
            if slot.is_empty() {
                if let Some(v) = value {
                    *slot = v.clone();
                }
            }
        }

        fill(&mut self.company_name, &parsed.company_name);
        fill(&mut self.business_number, &parsed.business_number);
        fill(&mut self.representative_name, &parsed.representative_name);
        fill(&mut self.address, &parsed.address);
        fill(&mut self.business_type, &parsed.business_type);
        fill(&mut self.business_item, &parsed.business_item);
        if self.established_at.is_none() {
            self.established_at = parsed.established_at;
        }
    }
}

/// Partial update payload for an existing company.
///
/// Absent JSON fields leave the stored value untouched. `establishedAt` and
/// `businessLicensePath` are nullable columns, so for them an explicit `null`
/// clears the value while an absent field still keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyUpdate {
    pub company_name: Option<String>,
    pub business_number: Option<String>,
    pub representative_name: Option<String>,
    pub address: Option<String>,
    pub business_type: Option<String>,
    pub business_item: Option<String>,
    pub credit_rating: Option<String>,
    pub risk_rating: Option<String>,
    pub memo: Option<String>,
    #[serde(deserialize_with = "nullable_field")]
    pub established_at: Option<Option<NaiveDate>>,
    pub loan_status: Option<String>,
    #[serde(deserialize_with = "nullable_field")]
    pub business_license_path: Option<Option<String>>,
}

/// Wraps a present field (value or `null`) in `Some` so it stays
/// distinguishable from an absent one, which falls back to `None` via the
/// struct-level default.
fn nullable_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl CompanyUpdate {
    /// Overlay the supplied fields onto a stored record.
    pub fn apply(&self, company: &mut Company) {
        fn set(slot: &mut String, value: &Option<String>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        set(&mut company.company_name, &self.company_name);
        set(&mut company.business_number, &self.business_number);
        set(&mut company.representative_name, &self.representative_name);
        set(&mut company.address, &self.address);
        set(&mut company.business_type, &self.business_type);
        set(&mut company.business_item, &self.business_item);
        set(&mut company.credit_rating, &self.credit_rating);
        set(&mut company.risk_rating, &self.risk_rating);
        set(&mut company.memo, &self.memo);
        if let Some(established_at) = self.established_at {
            company.established_at = established_at;
        }
        set(&mut company.loan_status, &self.loan_status);
        if let Some(path) = &self.business_license_path {
            company.business_license_path = path.clone();
        }
    }
}
