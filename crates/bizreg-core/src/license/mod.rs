//! Business-license field extraction module.
//!
//! Turns noisy OCR or plain-text output of a Korean business registration
//! certificate into structured fields. Extraction is pure and total: every
//! field is independently best-effort and a missing label never fails the
//! overall parse.

mod parser;
pub mod rules;
pub mod text;

pub use parser::{parse_license_text, ParsedLicense};
