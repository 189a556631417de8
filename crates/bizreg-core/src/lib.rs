//! Core library for business-record management.
//!
//! This crate provides:
//! - Korean business-license field extraction (company name, registration
//!   number, representative, address, business type/item, establishment date)
//! - CLOVA OCR client for turning uploaded license images into raw text
//! - SQLite record store for companies and their attached files

pub mod error;
pub mod license;
pub mod models;
pub mod ocr;
pub mod store;

pub use error::{BizregError, OcrError, Result, StoreError};
pub use license::{parse_license_text, ParsedLicense};
pub use models::company::{Company, CompanyInput, CompanyUpdate};
pub use models::config::AppConfig;
pub use models::file::{FileKind, FileRecord, NewFileRecord};
pub use ocr::ClovaClient;
pub use store::Store;
