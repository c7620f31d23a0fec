//! Parse HTTP response header lines into a HeaderMap.

use super::HeaderMap;

/// Collects the requested headers from raw response header lines.
///
/// Status lines, blank lines and unrequested headers are skipped.
pub(crate) fn parse_headers<S: AsRef<str>>(lines: &[String], names: &[S]) -> HeaderMap {
    let mut map = HeaderMap::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("HTTP/") {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let requested = names
                .iter()
                .any(|n| n.as_ref().eq_ignore_ascii_case(name));
            if requested {
                map.append(name, value.trim());
            }
        }
    }

    map
}

/// Reason phrase from a status line (`"HTTP/1.1 404 Not Found"` → `"Not Found"`).
/// HTTP/2 status lines carry none and yield `""`.
pub(crate) fn status_text(status_line: &str) -> String {
    status_line
        .trim()
        .splitn(3, ' ')
        .nth(2)
        .unwrap_or("")
        .trim()
        .to_string()
}
