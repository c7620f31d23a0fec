//! Filename inference from HTTP response headers.
//!
//! Combines an image extension derived from `Content-Type` with the filename
//! from `Content-Disposition`. Nothing here sanitizes: pass
//! [`FilenameGuess::filename`] through
//! [`sanitize_filename`](crate::path_model::sanitize_filename) before using it
//! on a filesystem.

mod content_disposition;
mod mime;
mod percent;

use serde::Serialize;

use crate::fetch_head::{HeaderFetchError, HeaderSource};

pub use content_disposition::parse_content_disposition_filename;
pub use mime::image_extension;
pub use percent::decode_uri;

pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_TYPE: &str = "Content-Type";

/// What the response headers say about a download's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameGuess {
    /// Raw (unsanitized) filename from `Content-Disposition`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Dotted extension from an `image/*` `Content-Type`, e.g. `".jpg"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_ext: Option<String>,
}

impl FilenameGuess {
    /// Builds a guess from already-fetched header values.
    pub fn from_headers(content_type: Option<&str>, content_disposition: Option<&str>) -> Self {
        Self {
            filename: content_disposition.and_then(parse_content_disposition_filename),
            mime_ext: content_type.and_then(image_extension),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filename.is_none() && self.mime_ext.is_none()
    }
}

/// Fetches `Content-Disposition` and `Content-Type` for `url` and infers a
/// filename and extension from them.
///
/// A header source failure is returned unchanged.
pub async fn resolve<S>(url: &str, source: &S) -> Result<FilenameGuess, HeaderFetchError>
where
    S: HeaderSource + ?Sized,
{
    let headers = source
        .fetch_headers(url, &[CONTENT_DISPOSITION, CONTENT_TYPE])
        .await?;

    let guess = FilenameGuess::from_headers(
        headers.get(CONTENT_TYPE),
        headers.get(CONTENT_DISPOSITION),
    );
    tracing::debug!(url, ?guess, "resolved filename guess");
    Ok(guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch_head::HeaderMap;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedHeaders {
        headers: HeaderMap,
        requested: Mutex<Vec<String>>,
    }

    impl FixedHeaders {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                headers: pairs.iter().copied().collect(),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HeaderSource for FixedHeaders {
        async fn fetch_headers(
            &self,
            _url: &str,
            names: &[&str],
        ) -> Result<HeaderMap, HeaderFetchError> {
            self.requested
                .lock()
                .unwrap()
                .extend(names.iter().map(|n| n.to_string()));
            Ok(self.headers.clone())
        }
    }

    struct Failing(HeaderFetchError);

    #[async_trait]
    impl HeaderSource for Failing {
        async fn fetch_headers(
            &self,
            _url: &str,
            _names: &[&str],
        ) -> Result<HeaderMap, HeaderFetchError> {
            Err(self.0.clone())
        }
    }

    #[tokio::test]
    async fn jpeg_with_disposition() {
        let source = FixedHeaders::new(&[
            ("Content-Type", "image/jpeg"),
            ("Content-Disposition", "attachment; filename=\"cat.jpeg\""),
        ]);
        let guess = resolve("https://example.com/x", &source).await.unwrap();
        assert_eq!(
            guess,
            FilenameGuess {
                filename: Some("cat.jpeg".to_string()),
                mime_ext: Some(".jpg".to_string()),
            }
        );
        let requested = source.requested.lock().unwrap().clone();
        assert_eq!(requested, vec![CONTENT_DISPOSITION, CONTENT_TYPE]);
    }

    #[tokio::test]
    async fn only_mime_ext() {
        let source = FixedHeaders::new(&[("Content-Type", "image/png")]);
        let guess = resolve("https://example.com/x", &source).await.unwrap();
        assert_eq!(guess.mime_ext.as_deref(), Some(".png"));
        assert!(guess.filename.is_none());
    }

    #[tokio::test]
    async fn only_disposition_filename() {
        let source = FixedHeaders::new(&[
            ("Content-Type", "application/pdf"),
            ("Content-Disposition", "attachment; filename=report.pdf"),
        ]);
        let guess = resolve("https://example.com/x", &source).await.unwrap();
        assert_eq!(guess.filename.as_deref(), Some("report.pdf"));
        assert!(guess.mime_ext.is_none());
    }

    #[tokio::test]
    async fn no_headers_yields_empty_guess() {
        let source = FixedHeaders::new(&[]);
        let guess = resolve("https://example.com/x", &source).await.unwrap();
        assert!(guess.is_empty());
    }

    #[tokio::test]
    async fn source_error_propagates_unchanged() {
        let err = HeaderFetchError::new(404, "Not Found");
        let source = Failing(err.clone());
        let got = resolve("https://example.com/missing", &source).await.unwrap_err();
        assert_eq!(got, err);
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let source: Box<dyn HeaderSource> =
            Box::new(FixedHeaders::new(&[("content-type", "image/svg+xml")]));
        let guess = resolve("https://example.com/x", source.as_ref()).await.unwrap();
        assert_eq!(guess.mime_ext.as_deref(), Some(".svg"));
    }

    #[test]
    fn serializes_like_the_extension_object() {
        let guess = FilenameGuess {
            filename: None,
            mime_ext: Some(".gif".to_string()),
        };
        assert_eq!(serde_json::to_string(&guess).unwrap(), r#"{"mimeExt":".gif"}"#);
        assert_eq!(serde_json::to_string(&FilenameGuess::default()).unwrap(), "{}");
    }
}
