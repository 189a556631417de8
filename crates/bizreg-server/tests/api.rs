//! End-to-end tests for the HTTP API, driven through the router without a
//! listening socket. OCR stays unconfigured; license text files exercise the
//! full preview/upload path.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

use bizreg_core::Store;
use bizreg_server::storage::BlobStore;
use bizreg_server::{router, AppState};

const BOUNDARY: &str = "bizreg-test-boundary";

const LICENSE_TEXT: &str = "\
사업자등록증
등록번호: 123-45-67890
상호: (주)테스트컴퍼니
대 표 자 : 홍길동
개업연월일 2020년 3월 5일
사업장 소재지: 서울특별시 강남구 테헤란로 123
업태: 도매 및 소매업
종목: 전자제품 판매
";

struct TestApp {
    router: axum::Router,
    // Kept alive so the uploads directory survives the test.
    _uploads: tempfile::TempDir,
}

fn test_app() -> TestApp {
    let uploads = tempfile::tempdir().unwrap();
    let state = AppState::new(
        Store::in_memory().unwrap(),
        BlobStore::new(uploads.path()),
        None,
    );
    TestApp {
        router: router(state),
        _uploads: uploads,
    }
}

fn multipart_body(text_fields: &[(&str, &str)], file: Option<(&str, &str, &str)>) -> Body {
    let mut body = String::new();
    for (name, value) in text_fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    if let Some((file_name, content_type, content)) = file {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n{content}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    Body::from(body)
}

fn multipart_request(uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(body)
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn preview_from_text_file_extracts_fields() {
    let app = test_app();

    let body = multipart_body(
        &[("fileType", "biz_license_text")],
        Some(("license.txt", "text/plain", LICENSE_TEXT)),
    );
    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/api/companies/preview-from-file", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;

    assert!(json["rawText"].as_str().unwrap().contains("등록번호"));
    assert_eq!(json["parsed"]["companyName"], "주테스트컴퍼니");
    assert_eq!(json["parsed"]["businessNumber"], "123-45-67890");
    assert_eq!(json["parsed"]["representativeName"], "홍길동");
    assert_eq!(json["parsed"]["establishedAt"], "2020-03-05");
}

#[tokio::test]
async fn preview_image_without_ocr_is_bad_gateway() {
    let app = test_app();

    let body = multipart_body(&[], Some(("license.jpg", "image/jpeg", "not-really-an-image")));
    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/api/companies/preview-from-file", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn preview_without_file_is_bad_request() {
    let app = test_app();

    let body = multipart_body(&[("fileType", "biz_license")], None);
    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/api/companies/preview-from-file", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn company_crud_roundtrip() {
    let app = test_app();

    // Create from a multipart form.
    let body = multipart_body(
        &[
            ("companyName", "테스트컴퍼니"),
            ("businessNumber", "123-45-67890"),
            ("representativeName", "홍길동"),
            ("establishedAt", "2020-03-05"),
        ],
        None,
    );
    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/api/companies", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["companyName"], "테스트컴퍼니");
    assert_eq!(created["establishedAt"], "2020-03-05");

    // Fetch it back.
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update via JSON; omitted fields must survive.
    let update = serde_json::json!({
        "companyName": "갱신된 상호",
    });
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/companies/{id}"))
                .header("content-type", "application/json")
                .body(Body::from(update.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["companyName"], "갱신된 상호");
    assert_eq!(updated["businessNumber"], "123-45-67890");
    assert_eq!(updated["representativeName"], "홍길동");
    assert_eq!(updated["establishedAt"], "2020-03-05");

    // Delete, then the fetch is a 404.
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/companies/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upload_to_missing_company_is_not_found() {
    let app = test_app();

    let body = multipart_body(
        &[("fileType", "biz_license_text")],
        Some(("license.txt", "text/plain", LICENSE_TEXT)),
    );
    let response = app
        .router
        .clone()
        .oneshot(multipart_request("/api/companies/no-such-id/upload", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn upload_text_license_stores_extracted_text_and_downloads() {
    let app = test_app();

    // Create a bare company first.
    let response = app
        .router
        .clone()
        .oneshot(multipart_request(
            "/api/companies",
            multipart_body(&[("companyName", "테스트컴퍼니")], None),
        ))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    // Attach a text license.
    let body = multipart_body(
        &[("fileType", "biz_license_text")],
        Some(("license.txt", "text/plain", LICENSE_TEXT)),
    );
    let response = app
        .router
        .clone()
        .oneshot(multipart_request(
            &format!("/api/companies/{id}/upload"),
            body,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let uploaded = json_body(response).await;
    assert_eq!(uploaded["file"]["fileType"], "business_license");
    assert!(uploaded["file"]["extractedText"]
        .as_str()
        .unwrap()
        .contains("홍길동"));
    let file_id = uploaded["file"]["id"].as_i64().unwrap();

    // The company's file list sees it.
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/companies/{id}/files"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let files = json_body(response).await;
    assert_eq!(files.as_array().unwrap().len(), 1);

    // And the blob downloads with the original name attached.
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/files/{file_id}/download"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename*=UTF-8''"));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes, LICENSE_TEXT.as_bytes());
}
