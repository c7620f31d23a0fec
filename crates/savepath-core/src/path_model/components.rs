//! Splitting `/`-delimited path strings into their parts.

/// Text after the last `/`, or the whole string if there is none.
pub fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Basename with any `:tag` suffix removed (`"photo.jpg:large"` → `"photo.jpg"`).
pub fn filename(path: &str) -> &str {
    let base = basename(path);
    match base.find(':') {
        Some(i) => &base[..i],
        None => base,
    }
}

/// Filename without its final extension. Unchanged if there is no extension.
pub fn file_part(path: &str) -> &str {
    let name = filename(path);
    match ext_start(name) {
        Some(i) => &name[..i],
        None => name,
    }
}

/// Final extension of the filename including the dot, or `""`.
pub fn file_ext(path: &str) -> &str {
    let name = filename(path);
    match ext_start(name) {
        Some(i) => &name[i..],
        None => "",
    }
}

/// Text before the last `/` with leading slashes removed; `""` without a `/`.
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => path[..i].trim_start_matches('/'),
        None => "",
    }
}

/// Byte index of the last `.` that is followed by at least one character.
fn ext_start(name: &str) -> Option<usize> {
    let dot = name.rfind('.')?;
    if dot + 1 < name.len() {
        Some(dot)
    } else {
        None
    }
}
