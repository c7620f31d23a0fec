use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::path_model::DEFAULT_REPLACEMENT;

/// Default save-path template: disposition name if the server sent one,
/// else the URL's file part, with the first available extension.
pub const DEFAULT_TEMPLATE: &str = "<dispname|name><dispext|ext|mimeext>";

/// HEAD probe parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Follow `Location` redirects and report the final response's headers.
    pub follow_redirects: bool,
    /// Optional User-Agent header.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Report a non-2xx final response as a failure instead of returning its
    /// headers.
    #[serde(default)]
    pub fail_on_http_error: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
            user_agent: None,
            fail_on_http_error: false,
        }
    }
}

/// Global configuration loaded from `~/.config/savepath/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavepathConfig {
    /// Template used by `savepath name` when `--template` is not given.
    pub template: String,
    /// Replacement for characters that are invalid in paths.
    pub replacement: String,
    /// Optional probe settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub probe: Option<ProbeConfig>,
}

impl Default for SavepathConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
            probe: None,
        }
    }
}

impl SavepathConfig {
    /// Probe settings, falling back to defaults.
    pub fn probe_config(&self) -> ProbeConfig {
        self.probe.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("savepath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SavepathConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SavepathConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SavepathConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SavepathConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
