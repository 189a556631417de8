//! Company CRUD endpoints.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Map, Value};
use tracing::warn;

use bizreg_core::models::company::{Company, CompanyInput, CompanyUpdate};

use crate::error::ApiError;
use crate::routes::files::{attach_file, UploadPart};
use crate::AppState;

/// `GET /api/companies`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = state.store()?.list_companies()?;
    Ok(Json(companies))
}

/// `POST /api/companies` - multipart form with the company fields plus an
/// optional `file` / `fileType` pair to attach in the same request.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Company>), ApiError> {
    let mut fields = Map::new();
    let mut file: Option<UploadPart> = None;
    let mut file_type = "business_license".to_string();

    while let Some(part) = multipart.next_field().await? {
        let name = part.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                file = Some(UploadPart::from_field(part).await?);
            }
            "fileType" => {
                file_type = part.text().await?;
            }
            "" => {}
            _ => {
                let value = part.text().await?;
                fields.insert(name, Value::String(value));
            }
        }
    }

    let input = company_input_from_form(fields)?;
    let company = state.store()?.create_company(&input)?;

    // Attaching the file is best-effort: the company row already exists and
    // stays even when storage or OCR fails.
    if let Some(upload) = file {
        if let Err(err) = attach_file(&state, &company.id, &file_type, upload).await {
            warn!(company_id = %company.id, "file attach failed: {err}");
        }
    }

    Ok((StatusCode::CREATED, Json(company)))
}

/// `GET /api/companies/:id`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Company>, ApiError> {
    let company = state.store()?.get_company(&id)?;
    Ok(Json(company))
}

/// `PUT /api/companies/:id` - partial update; omitted fields keep their
/// stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<CompanyUpdate>,
) -> Result<Json<Company>, ApiError> {
    let company = state.store()?.update_company(&id, &update)?;
    Ok(Json(company))
}

/// `DELETE /api/companies/:id` - removes the company and its file rows.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store()?.delete_company(&id)?;
    Ok(Json(json!({ "success": true })))
}

/// Deserialize form text fields into a [`CompanyInput`]. Optional values
/// arrive as empty strings in form data and become `null` first.
fn company_input_from_form(mut fields: Map<String, Value>) -> Result<CompanyInput, ApiError> {
    for key in ["establishedAt", "businessLicensePath"] {
        if matches!(fields.get(key), Some(Value::String(s)) if s.trim().is_empty()) {
            fields.insert(key.to_string(), Value::Null);
        }
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| ApiError::BadRequest(format!("invalid company fields: {e}")))
}
