//! CLI command implementations.

pub mod config;
pub mod parse;
pub mod serve;

use std::path::{Path, PathBuf};

use bizreg_core::AppConfig;

/// Default config file location, `<config_dir>/bizreg/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bizreg")
        .join("config.json")
}

/// Load configuration from an explicit path, the default location, or the
/// built-in defaults, then overlay the OCR environment variables.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut config = match config_path {
        Some(path) => AppConfig::from_file(Path::new(path))?,
        None => {
            let default = default_config_path();
            if default.exists() {
                AppConfig::from_file(&default)?
            } else {
                AppConfig::default()
            }
        }
    };
    config.apply_env();
    Ok(config)
}
