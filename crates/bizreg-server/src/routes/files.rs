//! File upload, listing, download, and license preview endpoints.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use bizreg_core::models::file::{
    is_text_file_type, FileKind, FileRecord, NewFileRecord, FILE_STATUS_ACTIVE,
};
use bizreg_core::{parse_license_text, ParsedLicense};

use crate::error::ApiError;
use crate::extract::{acquire_raw_text, is_plain_text};
use crate::AppState;

/// One uploaded file part, buffered.
pub(crate) struct UploadPart {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadPart {
    pub(crate) async fn from_field(field: Field<'_>) -> Result<Self, ApiError> {
        let file_name = field.file_name().unwrap_or("uploaded").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?.to_vec();
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

/// Store an uploaded file for a company: write the blob, acquire raw text for
/// business-license uploads, and insert the metadata row.
///
/// OCR failure is tolerated here; the file row is kept without extracted
/// text. Only the preview endpoint treats OCR failure as fatal.
pub(crate) async fn attach_file(
    state: &AppState,
    company_id: &str,
    file_type_raw: &str,
    upload: UploadPart,
) -> Result<FileRecord, ApiError> {
    let kind = FileKind::from_raw(file_type_raw);
    let as_text = is_text_file_type(file_type_raw);

    let blob = state.blobs().save(&upload.file_name, &upload.bytes).await?;

    let extracted_text = if kind == FileKind::BusinessLicense {
        if as_text {
            Some(String::from_utf8_lossy(&upload.bytes).into_owned())
        } else {
            match state.ocr() {
                Some(client) => match client.recognize(&upload.bytes, Some(&upload.file_name)).await
                {
                    Ok(text) => Some(text),
                    Err(err) => {
                        warn!("OCR failed during upload, storing file without text: {err}");
                        None
                    }
                },
                None => {
                    warn!("OCR not configured, storing file without text");
                    None
                }
            }
        }
    } else {
        None
    };

    let record = state.store()?.insert_file(&NewFileRecord {
        company_id: company_id.to_string(),
        file_type: kind,
        original_name: upload.file_name,
        stored_name: blob.stored_name,
        path: blob.web_path,
        extracted_text,
        status: Some(FILE_STATUS_ACTIVE.to_string()),
    })?;

    Ok(record)
}

/// Pull the `file` and `fileType` parts out of a multipart body.
async fn read_upload(
    mut multipart: Multipart,
) -> Result<(Option<UploadPart>, Option<String>), ApiError> {
    let mut file = None;
    let mut file_type = None;

    while let Some(part) = multipart.next_field().await? {
        let name = part.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => file = Some(UploadPart::from_field(part).await?),
            Some("fileType") => file_type = Some(part.text().await?),
            _ => {}
        }
    }

    Ok((file, file_type))
}

/// `POST /api/companies/:id/upload`
pub async fn upload(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    if !state.store()?.company_exists(&id)? {
        return Err(ApiError::NotFound(format!("company not found: {id}")));
    }

    let (file, file_type) = read_upload(multipart).await?;
    let upload = file.ok_or_else(|| ApiError::BadRequest("no file provided".to_string()))?;
    let file_type = file_type.unwrap_or_else(|| "business_license".to_string());

    let record = attach_file(&state, &id, &file_type, upload).await?;
    Ok(Json(json!({ "message": "file uploaded", "file": record })))
}

/// Response body of the preview endpoint: the raw text that was recovered
/// plus the structured fields, for the client to merge into its form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub raw_text: String,
    pub parsed: ParsedLicense,
}

/// `POST /api/companies/preview-from-file`
pub async fn preview(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PreviewResponse>, ApiError> {
    let (file, file_type) = read_upload(multipart).await?;
    let upload = file.ok_or_else(|| ApiError::BadRequest("no file provided".to_string()))?;
    let file_type = file_type.unwrap_or_else(|| "biz_license".to_string());

    let as_text = is_plain_text(&file_type, &upload.file_name, upload.content_type.as_deref());
    let raw_text = acquire_raw_text(state.ocr(), as_text, &upload.file_name, &upload.bytes).await?;
    let parsed = parse_license_text(&raw_text);

    Ok(Json(PreviewResponse { raw_text, parsed }))
}

/// `GET /api/companies/:id/files`
pub async fn list_for_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let files = state.store()?.files_for_company(&id)?;
    Ok(Json(files))
}

/// `GET /api/files`
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let files = state.store()?.list_files()?;
    Ok(Json(files))
}

/// `GET /api/files/:id/download`
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state.store()?.get_file(id)?;

    let bytes = state.blobs().read(&record.stored_name).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiError::NotFound(format!("file missing on disk: {}", record.stored_name))
        } else {
            ApiError::Internal(e.to_string())
        }
    })?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "application/octet-stream".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename*=UTF-8''{}",
                percent_encode(&record.original_name)
            ),
        ),
    ];

    Ok((headers, bytes))
}

/// RFC 5987 percent-encoding for the download file name, which is usually
/// Korean and cannot go into a header verbatim.
fn percent_encode(name: &str) -> String {
    let mut out = String::new();
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
