//! Header fetch failure.

use thiserror::Error;

/// Failure to fetch headers for a URL.
///
/// `status` is the HTTP status code, or `0` when no response was received
/// (DNS, connect, TLS or timeout errors); `status_text` is the reason phrase
/// or the transport error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("header fetch failed (status {status}): {status_text}")]
pub struct HeaderFetchError {
    pub status: u32,
    pub status_text: String,
}

impl HeaderFetchError {
    pub fn new(status: u32, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }

    /// True if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        self.status == 0
    }
}

impl From<curl::Error> for HeaderFetchError {
    fn from(e: curl::Error) -> Self {
        HeaderFetchError::new(0, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_text() {
        let e = HeaderFetchError::new(404, "Not Found");
        assert_eq!(e.to_string(), "header fetch failed (status 404): Not Found");
        assert!(!e.is_transport());
    }

    #[test]
    fn transport_errors_have_status_zero() {
        let e = HeaderFetchError::new(0, "Couldn't connect to server");
        assert!(e.is_transport());
    }
}
