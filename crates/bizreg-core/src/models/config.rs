//! Configuration structures for the server and CLI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Record store configuration.
    pub database: DatabaseConfig,

    /// Uploaded-file blob store configuration.
    pub storage: StorageConfig,

    /// CLOVA OCR configuration.
    pub ocr: OcrConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database file path.
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/bizreg.sqlite"),
        }
    }
}

/// Blob store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory uploaded files are written to.
    pub upload_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("data/uploads"),
        }
    }
}

/// CLOVA OCR configuration. Endpoint and secret usually come from the
/// environment rather than the config file so the secret stays out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Invoke URL of the CLOVA General OCR endpoint.
    pub url: Option<String>,

    /// Value for the `X-OCR-SECRET` header.
    pub secret: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            url: None,
            secret: None,
            timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }

    /// Overlay `CLOVA_OCR_URL` / `CLOVA_OCR_SECRET` from the environment.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("CLOVA_OCR_URL") {
            if !url.trim().is_empty() {
                self.ocr.url = Some(url);
            }
        }
        if let Ok(secret) = std::env::var("CLOVA_OCR_SECRET") {
            if !secret.trim().is_empty() {
                self.ocr.secret = Some(secret);
            }
        }
    }
}
