//! Disk blob store for uploaded files.
//!
//! Files are stored flat under one uploads directory with UUID-based names;
//! the original file name only survives in the database row.

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

/// Blob store rooted at the configured uploads directory.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

/// Where a saved blob ended up.
#[derive(Debug, Clone)]
pub struct StoredBlob {
    /// UUID-based file name on disk.
    pub stored_name: String,
    /// Web-accessible path, `/uploads/<stored_name>`.
    pub web_path: String,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write bytes under a fresh UUID name, keeping the original extension.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<StoredBlob> {
        fs::create_dir_all(&self.root).await?;

        let stored_name = match Path::new(original_name).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_lowercase()),
            None => Uuid::new_v4().to_string(),
        };

        fs::write(self.root.join(&stored_name), bytes).await?;

        Ok(StoredBlob {
            web_path: format!("/uploads/{stored_name}"),
            stored_name,
        })
    }

    /// Read a blob back by its stored name.
    pub async fn read(&self, stored_name: &str) -> std::io::Result<Vec<u8>> {
        fs::read(self.root.join(stored_name)).await
    }
}
