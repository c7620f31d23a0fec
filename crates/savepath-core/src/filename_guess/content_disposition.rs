//! Content-Disposition filename extraction.

use super::percent::decode_uri;

const FILENAME: &str = "filename";

/// Extracts the filename from a raw Content-Disposition header value.
///
/// Finds the first `filename...=` parameter (so `filename*=` matches too) and
/// takes either a quoted value closed by the same quote character on the same
/// line, or an unquoted run up to `;` or a newline. All `'` and `"` are then
/// removed and the result is percent-decoded. For `filename*=` the
/// `charset'language'` prefix is dropped before decoding.
///
/// Returns `None` when there is no such parameter or its value is empty.
pub fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
    let (param_suffix, raw) = find_filename_value(header_value)?;
    if raw.is_empty() {
        return None;
    }

    let unquoted: String = raw.chars().filter(|&c| c != '"' && c != '\'').collect();
    let encoded = if param_suffix.trim() == "*" {
        strip_ext_value_prefix(raw).unwrap_or(&unquoted).to_string()
    } else {
        unquoted
    };

    let decoded = decode_uri(&encoded).unwrap_or(encoded);
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// Locates the first `filename<suffix>=<value>` and returns `(suffix, value)`,
/// where `value` still carries its quotes.
fn find_filename_value(header: &str) -> Option<(&str, &str)> {
    let mut from = 0;
    while let Some(idx) = header[from..].find(FILENAME) {
        let start = from + idx + FILENAME.len();
        let rest = &header[start..];
        if let Some(stop) = rest.find([';', '=', '\n']) {
            if rest[stop..].starts_with('=') {
                return Some((&rest[..stop], capture_value(&rest[stop + 1..])));
            }
        }
        from += idx + 1;
    }
    None
}

/// Quoted value including its quotes, else everything up to `;` or newline.
fn capture_value(value: &str) -> &str {
    if let Some(quote) = value.chars().next().filter(|c| *c == '"' || *c == '\'') {
        let line_end = value.find('\n').unwrap_or(value.len());
        if let Some(close) = value[1..line_end].find(quote) {
            return &value[..close + 2];
        }
    }
    let end = value.find([';', '\n']).unwrap_or(value.len());
    &value[..end]
}

/// `UTF-8''caf%C3%A9.txt` → `caf%C3%A9.txt` (RFC 5987 ext-value).
fn strip_ext_value_prefix(raw: &str) -> Option<&str> {
    let raw = raw.trim_matches('"');
    let (_charset, rest) = raw.split_once('\'')?;
    let (_language, value) = rest.split_once('\'')?;
    Some(value)
}
