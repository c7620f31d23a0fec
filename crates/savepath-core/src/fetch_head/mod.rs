//! HTTP HEAD header probing.
//!
//! Filename inference only needs a handful of response headers, so the
//! transport is abstracted behind [`HeaderSource`]. [`CurlHeaderSource`] is the
//! libcurl-backed implementation; tests inject their own.

mod curl_source;
mod error;
mod parse;

use async_trait::async_trait;
use std::collections::HashMap;

pub use curl_source::CurlHeaderSource;
pub use error::HeaderFetchError;

/// Headers returned for one URL, keyed case-insensitively.
///
/// Only headers that were requested and present in the response are stored;
/// [`HeaderMap::get`] returns `None` for everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    headers: HashMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header value. Repeated names are joined with `", "`.
    pub fn append(&mut self, name: &str, value: &str) {
        self.headers
            .entry(name.to_ascii_lowercase())
            .and_modify(|v| {
                v.push_str(", ");
                v.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = HeaderMap::new();
        for (name, value) in iter {
            map.append(name, value);
        }
        map
    }
}

/// Fetches selected response headers for a URL.
///
/// Implementations own timeouts and cancellation; callers await exactly once
/// and propagate the error unchanged.
#[async_trait]
pub trait HeaderSource: Send + Sync {
    async fn fetch_headers(
        &self,
        url: &str,
        names: &[&str],
    ) -> Result<HeaderMap, HeaderFetchError>;
}
