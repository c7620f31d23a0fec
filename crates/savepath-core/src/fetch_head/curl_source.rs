//! libcurl-backed header source.

use async_trait::async_trait;
use std::str;
use std::time::Duration;

use crate::config::ProbeConfig;

use super::parse::{parse_headers, status_text};
use super::{HeaderFetchError, HeaderMap, HeaderSource};

/// Fetches headers with a HEAD request through libcurl.
///
/// The transfer is blocking, so it runs on tokio's blocking pool.
#[derive(Debug, Clone, Default)]
pub struct CurlHeaderSource {
    config: ProbeConfig,
}

impl CurlHeaderSource {
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl HeaderSource for CurlHeaderSource {
    async fn fetch_headers(
        &self,
        url: &str,
        names: &[&str],
    ) -> Result<HeaderMap, HeaderFetchError> {
        let url = url.to_string();
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        let config = self.config.clone();

        tracing::debug!(url = %url, ?names, "HEAD probe");
        let result = tokio::task::spawn_blocking(move || probe(&url, &names, &config))
            .await
            .map_err(|e| HeaderFetchError::new(0, format!("probe task failed: {e}")))?;

        if let Err(e) = &result {
            tracing::warn!(status = e.status, "HEAD probe failed: {}", e.status_text);
        }
        result
    }
}

/// Performs a HEAD request and returns the requested headers.
///
/// With redirects enabled only the final response's headers are kept. An HTTP
/// error response still yields its headers unless `fail_on_http_error` is set,
/// in which case it fails with the status and reason phrase.
fn probe(
    url: &str,
    names: &[String],
    config: &ProbeConfig,
) -> Result<HeaderMap, HeaderFetchError> {
    let mut lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(config.follow_redirects)?;
    easy.connect_timeout(Duration::from_secs(config.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(config.timeout_secs))?;
    if let Some(ua) = &config.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                let line = s.trim_end();
                // Each redirect hop starts a new header block.
                if line.starts_with("HTTP/") {
                    lines.clear();
                }
                lines.push(line.to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        let text = lines.first().map(|l| status_text(l)).unwrap_or_default();
        if config.fail_on_http_error {
            return Err(HeaderFetchError::new(code, text));
        }
        tracing::debug!(status = code, reason = %text, "HTTP error response, keeping its headers");
    }

    Ok(parse_headers(&lines, names))
}
