//! Replacing characters that are invalid in filenames and paths.

/// Characters rejected anywhere in a path.
pub(super) const INVALID_PATH_CHARS: &[char] = &['*', '"', ':', '<', '>', '|', '?'];

/// Default replacement for invalid characters.
pub const DEFAULT_REPLACEMENT: &str = "_";

/// Replaces each of `* " / \ : < > | ?` with `replacement`.
pub fn sanitize_filename(name: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '/' || c == '\\' || INVALID_PATH_CHARS.contains(&c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

/// Replaces `* " : < > | ?` with `replacement`, turns every run of `/` or `\`
/// into a single `/`, then strips one leading and one trailing `/`.
pub fn sanitize_path(path: &str, replacement: &str) -> String {
    let replaced: String = path
        .chars()
        .map(|c| {
            if INVALID_PATH_CHARS.contains(&c) {
                replacement.to_string()
            } else {
                c.to_string()
            }
        })
        .collect();

    // Collapse after replacing, so separators inside `replacement` merge too.
    let mut out = String::with_capacity(replaced.len());
    let mut in_separator_run = false;
    for c in replaced.chars() {
        if c == '/' || c == '\\' {
            if !in_separator_run {
                out.push('/');
            }
            in_separator_run = true;
        } else {
            in_separator_run = false;
            out.push(c);
        }
    }

    let trimmed = out.strip_prefix('/').unwrap_or(&out);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Joins `parts` with `sep` and collapses repeated separators into one.
pub fn path_join<S: AsRef<str>>(parts: &[S], sep: &str) -> String {
    let joined = parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<&str>>()
        .join(sep);
    if sep.is_empty() {
        return joined;
    }

    let mut out = String::with_capacity(joined.len());
    let mut rest = joined.as_str();
    while let Some(i) = rest.find(sep) {
        out.push_str(&rest[..i]);
        out.push_str(sep);
        rest = &rest[i + sep.len()..];
        while let Some(after) = rest.strip_prefix(sep) {
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
