use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::request::UploadTarget;

pub const DEFAULT_SERVER_BASE_URL: &str = "http://106.15.53.24:3000";
pub const DEFAULT_UPLOAD_PATH: &str = "/upload";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Global configuration loaded from `~/.config/wiup/config.toml`.
///
/// Command-line flags override each field for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiupConfig {
    /// Server base URL, e.g. `http://127.0.0.1:3000`.
    pub server_base_url: String,
    /// Upload endpoint path on the server.
    pub upload_path: String,
    /// Seconds to wait for the server to answer.
    pub timeout_secs: u64,
    /// Upload token, required when the server has one configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for WiupConfig {
    fn default() -> Self {
        Self {
            server_base_url: DEFAULT_SERVER_BASE_URL.to_string(),
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }
}

impl WiupConfig {
    pub fn target(&self) -> UploadTarget {
        UploadTarget {
            base_url: self.server_base_url.clone(),
            upload_path: self.upload_path.clone(),
            token: self.token.clone().filter(|t| !t.is_empty()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wiup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WiupConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WiupConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WiupConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = WiupConfig::default();
        assert_eq!(cfg.server_base_url, "http://106.15.53.24:3000");
        assert_eq!(cfg.upload_path, "/upload");
        assert_eq!(cfg.timeout(), Duration::from_secs(20));
        assert!(cfg.token.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = WiupConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        assert!(!toml.contains("token"));
        let parsed: WiupConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            server_base_url = "http://10.0.0.5:8080/"
            upload_path = "api/upload"
            timeout_secs = 60
            token = "abc123"
        "#;
        let cfg: WiupConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.timeout_secs, 60);
        let target = cfg.target();
        assert_eq!(target.url(), "http://10.0.0.5:8080/api/upload");
        assert_eq!(target.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn empty_token_means_none() {
        let cfg = WiupConfig {
            token: Some(String::new()),
            ..WiupConfig::default()
        };
        assert!(cfg.target().token.is_none());
    }
}
