//! Raw-text acquisition for uploaded license files.
//!
//! Plain-text uploads are read directly; everything else goes through the
//! CLOVA OCR collaborator. The extractor downstream only ever sees a string.

use bizreg_core::{ClovaClient, OcrError};

use crate::error::ApiError;

/// Whether an upload should be read as plain text instead of OCR'd.
///
/// Declared text uploads win; otherwise the content type or a `.txt` suffix
/// decides.
pub fn is_plain_text(file_type: &str, file_name: &str, content_type: Option<&str>) -> bool {
    bizreg_core::models::file::is_text_file_type(file_type)
        || content_type == Some("text/plain")
        || file_name.to_lowercase().ends_with(".txt")
}

/// Turn uploaded bytes into raw text.
///
/// Text files decode lossily (OCR output is noisy anyway); images require a
/// configured OCR client and propagate its failure to the caller.
pub async fn acquire_raw_text(
    ocr: Option<&ClovaClient>,
    as_text: bool,
    file_name: &str,
    bytes: &[u8],
) -> Result<String, ApiError> {
    if as_text {
        return Ok(String::from_utf8_lossy(bytes).into_owned());
    }

    match ocr {
        Some(client) => Ok(client.recognize(bytes, Some(file_name)).await?),
        None => Err(ApiError::Ocr(OcrError::NotConfigured)),
    }
}
