//! Serve command - run the HTTP API server.

use std::fs;
use std::net::SocketAddr;

use clap::Args;
use tracing::{info, warn};

use bizreg_core::{ClovaClient, Store};
use bizreg_server::storage::BlobStore;
use bizreg_server::AppState;

use super::load_config;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Socket address to bind (overrides the config file)
    #[arg(short, long)]
    bind: Option<String>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let bind = args.bind.unwrap_or(config.server.bind);
    let addr: SocketAddr = bind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", bind, e))?;

    if let Some(parent) = config.database.path.parent() {
        fs::create_dir_all(parent)?;
    }
    let store = Store::open(&config.database.path)?;
    info!("Record store at {}", config.database.path.display());

    let blobs = BlobStore::new(&config.storage.upload_dir);

    let ocr = ClovaClient::from_config(&config.ocr)?;
    if ocr.is_none() {
        warn!("CLOVA OCR not configured; image uploads will not be parsed");
    }

    let state = AppState::new(store, blobs, ocr);
    bizreg_server::serve(addr, state).await
}
