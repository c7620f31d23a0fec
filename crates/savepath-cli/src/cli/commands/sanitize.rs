//! `savepath sanitize <path>` – replace invalid characters.

use anyhow::Result;
use savepath_core::path_model::{sanitize_filename, sanitize_path};

pub fn run_sanitize(path: &str, as_filename: bool, replacement: &str) -> Result<()> {
    let sanitized = if as_filename {
        sanitize_filename(path, replacement)
    } else {
        sanitize_path(path, replacement)
    };
    println!("{sanitized}");
    Ok(())
}
