//! CLOVA OCR integration.
//!
//! The OCR provider is a remote service; all this module does is submit image
//! bytes and assemble the recognized text, "give me a string of recognized
//! text, possibly empty".

mod clova;

pub use clova::ClovaClient;
