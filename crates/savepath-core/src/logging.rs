//! Tracing setup: append to `savepath.log` under the XDG state dir, or write
//! to stderr when that file cannot be opened.

use anyhow::{anyhow, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "savepath.log";

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info,savepath=debug,savepath_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/savepath/savepath.log`; the directory is created.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("savepath")?;
    Ok(xdg_dirs.place_state_file(LOG_FILE_NAME)?)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber writing to [`log_file_path`] and returns
/// that path. Errors leave no subscriber installed, so the caller can fall
/// back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "savepath logging initialized");
    Ok(path)
}

/// Stderr-only subscriber. A subscriber that is already installed is kept.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
