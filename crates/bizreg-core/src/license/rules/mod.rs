//! Rule-based field extractors for Korean business licenses.
//!
//! One module per field so the label vocabulary stays independently testable;
//! the parser composes them without knowing any pattern details.

pub mod activity;
pub mod address;
pub mod company;
pub mod established;
pub mod number;
pub mod patterns;
pub mod representative;

pub use activity::{extract_business_item, extract_business_type};
pub use address::{extract_address, AddressExtractor};
pub use company::{extract_company_name, CompanyNameExtractor};
pub use established::{extract_established_at, EstablishedExtractor};
pub use number::{extract_business_number, BusinessNumberExtractor};
pub use representative::{extract_representative, RepresentativeExtractor};

/// Trait for field extractors.
///
/// Extractors take the raw license text and perform their own view
/// normalization (line scan or flattened whole-text search), so each one is a
/// self-contained pure function of the input.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
