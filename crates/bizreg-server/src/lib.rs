//! HTTP API for business-record management.
//!
//! Exposes the company CRUD, file upload/list/download, and business-license
//! preview endpoints over axum. The license field extractor stays a pure
//! function in `bizreg-core`; this crate wires it to multipart uploads and
//! the CLOVA OCR collaborator.

pub mod error;
pub mod extract;
pub mod routes;
pub mod storage;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use bizreg_core::{ClovaClient, Store};

use crate::error::ApiError;
use crate::storage::BlobStore;

/// Uploads larger than this are rejected outright.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application state shared across routes.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Store>>,
    blobs: BlobStore,
    ocr: Option<ClovaClient>,
}

impl AppState {
    pub fn new(store: Store, blobs: BlobStore, ocr: Option<ClovaClient>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            blobs,
            ocr,
        }
    }

    /// Lock the record store for one request-scoped operation.
    pub(crate) fn store(&self) -> Result<MutexGuard<'_, Store>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("record store lock poisoned".to_string()))
    }

    pub(crate) fn blobs(&self) -> &BlobStore {
        &self.blobs
    }

    pub(crate) fn ocr(&self) -> Option<&ClovaClient> {
        self.ocr.as_ref()
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/companies",
            get(routes::companies::list).post(routes::companies::create),
        )
        .route(
            "/api/companies/preview-from-file",
            post(routes::files::preview),
        )
        .route(
            "/api/companies/:id",
            get(routes::companies::get_one)
                .put(routes::companies::update)
                .delete(routes::companies::delete),
        )
        .route(
            "/api/companies/:id/files",
            get(routes::files::list_for_company),
        )
        .route("/api/companies/:id/upload", post(routes::files::upload))
        .route("/api/files", get(routes::files::list_all))
        .route("/api/files/:id/download", get(routes::files::download))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Start the HTTP server and run until shutdown.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = router(state);

    info!("HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
