//! Attached-file metadata models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status value for a file row that is live.
pub const FILE_STATUS_ACTIVE: &str = "사용중";

/// Kind of attached document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Business registration certificate (image or text).
    BusinessLicense,
    /// Credit report.
    Credit,
    /// Call recording.
    CallRecording,
    /// Anything else, stored verbatim.
    #[serde(untagged)]
    Other(String),
}

impl FileKind {
    /// Normalize the loose client-side spellings into the stored kind.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "business_license" | "businessLicense" | "biz_license" | "biz_license_text"
            | "business_license_text" => FileKind::BusinessLicense,
            "credit" => FileKind::Credit,
            "call_recording" | "callRecording" => FileKind::CallRecording,
            "" => FileKind::Other("other".to_string()),
            other => FileKind::Other(other.to_string()),
        }
    }

    /// Stored string form.
    pub fn as_str(&self) -> &str {
        match self {
            FileKind::BusinessLicense => "business_license",
            FileKind::Credit => "credit",
            FileKind::CallRecording => "call_recording",
            FileKind::Other(s) => s,
        }
    }
}

/// True when the client declared the upload as a plain-text license dump that
/// must be read directly instead of routed through OCR.
pub fn is_text_file_type(raw: &str) -> bool {
    raw == "biz_license_text" || raw == "business_license_text"
}

/// A persisted file row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: i64,
    pub company_id: String,
    pub file_type: FileKind,

    /// File name as uploaded by the user.
    pub original_name: String,

    /// UUID-based name the blob is stored under.
    pub stored_name: String,

    /// Web-accessible path, e.g. `/uploads/<stored_name>`.
    pub path: String,

    /// Raw text recovered from the file (OCR result or direct read).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,

    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a new file row.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub company_id: String,
    pub file_type: FileKind,
    pub original_name: String,
    pub stored_name: String,
    pub path: String,
    pub extracted_text: Option<String>,
    pub status: Option<String>,
}
