//! Error types for the bizreg-core library.

use thiserror::Error;

/// Main error type for the bizreg library.
#[derive(Error, Debug)]
pub enum BizregError {
    /// OCR service error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the CLOVA OCR client.
///
/// The license field extractor itself has no error path; a field that cannot
/// be matched is simply absent. These errors only arise while acquiring raw
/// text from the remote OCR service.
#[derive(Error, Debug)]
pub enum OcrError {
    /// OCR endpoint or secret is not configured.
    #[error("CLOVA OCR is not configured; set CLOVA_OCR_URL and CLOVA_OCR_SECRET")]
    NotConfigured,

    /// The HTTP request failed.
    #[error("OCR request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The OCR service returned a non-success status.
    #[error("OCR service returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Errors from the SQLite record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database error.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A requested record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

/// Result type for the bizreg library.
pub type Result<T> = std::result::Result<T, BizregError>;
