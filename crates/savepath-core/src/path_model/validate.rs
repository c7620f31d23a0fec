//! Validity checks for relative save paths.

use super::components::{file_ext, file_part};
use super::sanitize::INVALID_PATH_CHARS;

/// True if `path` is non-empty, does not start with `.`, does not end with
/// `.` or `/`, and contains none of `* " : < > | ?`.
pub fn is_valid_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('.')
        && !path.ends_with(['.', '/'])
        && !path.contains(INVALID_PATH_CHARS)
}

/// A valid path whose filename has both a name part and an extension.
pub fn is_valid_filename(path: &str) -> bool {
    is_valid_path(path) && !file_part(path).is_empty() && !file_ext(path).is_empty()
}
