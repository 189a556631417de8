//! CLOVA General OCR HTTP client.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// Client for the CLOVA General OCR invoke endpoint.
#[derive(Debug, Clone)]
pub struct ClovaClient {
    http: reqwest::Client,
    url: String,
    secret: String,
}

impl ClovaClient {
    /// Create a client for the given invoke URL and secret.
    pub fn new(url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            secret: secret.into(),
        }
    }

    /// Build a client from configuration. Returns `None` when the endpoint is
    /// not configured, so callers can treat OCR as an optional collaborator.
    pub fn from_config(config: &OcrConfig) -> Result<Option<Self>, OcrError> {
        let (url, secret) = match (&config.url, &config.secret) {
            (Some(url), Some(secret)) => (url.clone(), secret.clone()),
            _ => return Ok(None),
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Some(Self { http, url, secret }))
    }

    /// Submit image bytes and return the recognized text.
    ///
    /// The file name is only used to tell CLOVA the image format; unknown
    /// extensions fall back to `jpg`.
    pub async fn recognize(
        &self,
        bytes: &[u8],
        file_name: Option<&str>,
    ) -> Result<String, OcrError> {
        let name = file_name.unwrap_or("business-license");
        let body = OcrRequest {
            version: "V2",
            request_id: format!("req-{}", Uuid::new_v4()),
            timestamp: chrono::Utc::now().timestamp_millis(),
            images: vec![OcrRequestImage {
                format: image_format(name),
                name,
                data: BASE64.encode(bytes),
            }],
        };

        let response = self
            .http
            .post(&self.url)
            .header("X-OCR-SECRET", &self.secret)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OcrResponse = response.json().await?;
        let text = parsed
            .images
            .first()
            .map(|image| assemble_text(&image.fields))
            .unwrap_or_default();

        debug!(chars = text.len(), "CLOVA OCR returned text");
        Ok(text)
    }
}

/// Join recognized fields into raw text: newline after a field that ends its
/// line, single space between fields otherwise.
fn assemble_text(fields: &[OcrField]) -> String {
    let mut out = String::new();
    for (index, field) in fields.iter().enumerate() {
        out.push_str(&field.infer_text);
        if field.line_break {
            out.push('\n');
        } else if index + 1 < fields.len() {
            out.push(' ');
        }
    }
    out.trim().to_string()
}

fn image_format(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(str::to_lowercase).as_deref() {
        Some("png") => "png",
        Some("pdf") => "pdf",
        _ => "jpg",
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OcrRequest<'a> {
    version: &'static str,
    request_id: String,
    timestamp: i64,
    images: Vec<OcrRequestImage<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OcrRequestImage<'a> {
    format: &'static str,
    name: &'a str,
    data: String,
}

#[derive(Deserialize)]
struct OcrResponse {
    #[serde(default)]
    images: Vec<OcrResponseImage>,
}

#[derive(Deserialize)]
struct OcrResponseImage {
    #[serde(default)]
    fields: Vec<OcrField>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct OcrField {
    infer_text: String,
    line_break: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field(text: &str, line_break: bool) -> OcrField {
        OcrField {
            infer_text: text.to_string(),
            line_break,
        }
    }

    #[test]
    fn test_assemble_text_spaces_and_breaks() {
        let fields = vec![
            field("상호:", false),
            field("테스트컴퍼니", true),
            field("대표자:", false),
            field("홍길동", true),
        ];
        assert_eq!(assemble_text(&fields), "상호: 테스트컴퍼니\n대표자: 홍길동");
    }

    #[test]
    fn test_assemble_text_empty() {
        assert_eq!(assemble_text(&[]), "");
    }

    #[test]
    fn test_image_format_from_extension() {
        assert_eq!(image_format("license.PNG"), "png");
        assert_eq!(image_format("scan.pdf"), "pdf");
        assert_eq!(image_format("photo.jpeg"), "jpg");
        assert_eq!(image_format("noext"), "jpg");
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "version": "V2",
            "images": [{
                "fields": [
                    {"inferText": "등록번호:", "lineBreak": false, "inferConfidence": 0.99},
                    {"inferText": "123-45-67890", "lineBreak": true}
                ]
            }]
        }"#;
        let parsed: OcrResponse = serde_json::from_str(json).unwrap();
        let text = assemble_text(&parsed.images[0].fields);
        assert_eq!(text, "등록번호: 123-45-67890");
    }

    #[test]
    fn test_from_config_unconfigured() {
        let client = ClovaClient::from_config(&OcrConfig::default()).unwrap();
        assert!(client.is_none());
    }
}
