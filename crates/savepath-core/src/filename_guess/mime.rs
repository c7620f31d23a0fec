//! File extension from an image Content-Type.

/// Maps an `image/*` Content-Type to a dotted extension.
///
/// `jpeg` becomes `.jpg` and `svg+xml` becomes `.svg` in any case; other
/// subtypes pass through unchanged. Parameters (`; charset=...`) are ignored.
/// Non-image types and an empty subtype yield `None`.
pub fn image_extension(content_type: &str) -> Option<String> {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    let (kind, subtype) = essence.split_once('/')?;
    if !kind.eq_ignore_ascii_case("image") {
        return None;
    }

    let ext = match subtype.trim() {
        "" => return None,
        s if s.eq_ignore_ascii_case("jpeg") => "jpg",
        s if s.eq_ignore_ascii_case("svg+xml") => "svg",
        other => other,
    };
    Some(format!(".{ext}"))
}
