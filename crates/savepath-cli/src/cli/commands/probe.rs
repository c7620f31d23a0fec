//! `savepath probe <url>` – infer filename and extension from response headers.

use anyhow::{Context, Result};
use savepath_core::config::SavepathConfig;
use savepath_core::fetch_head::CurlHeaderSource;
use savepath_core::filename_guess;

pub async fn run_probe(cfg: &SavepathConfig, url: &str, json: bool) -> Result<()> {
    let source = CurlHeaderSource::new(cfg.probe_config());
    let guess = filename_guess::resolve(url, &source)
        .await
        .with_context(|| format!("probe {url}"))?;

    if json {
        println!("{}", serde_json::to_string(&guess)?);
    } else {
        println!("{:<10} {}", "filename", guess.filename.as_deref().unwrap_or("-"));
        println!("{:<10} {}", "mime ext", guess.mime_ext.as_deref().unwrap_or("-"));
    }
    Ok(())
}
