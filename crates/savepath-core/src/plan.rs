//! Save-path planning: URL + header guess + template → sanitized relative path.
//!
//! Template variables derived from a URL:
//!
//! | name | value |
//! |---|---|
//! | `url` | the URL as given |
//! | `host` | host name, `""` if none |
//! | `path` | decoded URL path without the leading `/` |
//! | `dir` | directory part of `path` |
//! | `basename`, `filename`, `name`, `ext` | basename, filename, file part and extension of `path` |
//! | `mimeext` | extension from an image Content-Type |
//! | `disposition`, `dispname`, `dispext` | Content-Disposition filename, its file part and extension |
//!
//! Every variable is always present (possibly empty), so a fallback chain like
//! `<dispname|name>` falls through instead of printing a literal name.

use thiserror::Error;

use crate::filename_guess::{decode_uri, FilenameGuess};
use crate::path_model::{
    basename, dirname, file_ext, file_part, filename, is_valid_filename, is_valid_path,
    sanitize_filename, sanitize_path,
};
use crate::template::{expand, VariableTable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The expanded and sanitized template is not a usable relative file path.
    #[error("template produced an invalid save path: {path:?}")]
    InvalidPath { path: String },
}

/// Builds the template variables for `url` and an optional header guess.
///
/// The disposition filename is sanitized (with `replacement`) before it is
/// split, so a server-sent name can never introduce directories.
pub fn vars_for_url(url: &str, guess: &FilenameGuess, replacement: &str) -> VariableTable {
    let (host, raw_path) = match url::Url::parse(url) {
        Ok(parsed) => (
            parsed.host_str().unwrap_or("").to_string(),
            parsed.path().trim_start_matches('/').to_string(),
        ),
        Err(_) => (String::new(), url.trim_start_matches('/').to_string()),
    };
    let path = decode_uri(&raw_path).unwrap_or(raw_path);

    let disposition = guess
        .filename
        .as_deref()
        .map(|f| sanitize_filename(f, replacement))
        .unwrap_or_default();

    let mut vars = VariableTable::new();
    vars.insert("url", url);
    vars.insert("host", host);
    vars.insert("dir", dirname(&path));
    vars.insert("basename", basename(&path));
    vars.insert("filename", filename(&path));
    vars.insert("name", file_part(&path));
    vars.insert("ext", file_ext(&path));
    vars.insert("mimeext", guess.mime_ext.clone().unwrap_or_default());
    vars.insert("dispname", file_part(&disposition));
    vars.insert("dispext", file_ext(&disposition));
    vars.insert("disposition", disposition);
    vars.insert("path", path);
    vars
}

/// Expands `template`, sanitizes the result as a path, and checks that it
/// names a file with an extension.
pub fn plan_save_path(
    template: &str,
    vars: &VariableTable,
    replacement: &str,
) -> Result<String, PlanError> {
    let expanded = expand(template, vars);
    let path = sanitize_path(&expanded, replacement);

    if !is_valid_path(&path) || !is_valid_filename(basename(&path)) {
        tracing::debug!(template, expanded = %expanded, path = %path, "rejected save path");
        return Err(PlanError::InvalidPath { path });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TEMPLATE;

    fn guess(filename: Option<&str>, mime_ext: Option<&str>) -> FilenameGuess {
        FilenameGuess {
            filename: filename.map(String::from),
            mime_ext: mime_ext.map(String::from),
        }
    }

    #[test]
    fn url_variables() {
        let vars = vars_for_url(
            "https://pbs.example.com/media/cat%20pic.jpg:large?x=1",
            &FilenameGuess::default(),
            "_",
        );
        assert_eq!(vars.get("host"), Some("pbs.example.com"));
        assert_eq!(vars.get("path"), Some("media/cat pic.jpg:large"));
        assert_eq!(vars.get("dir"), Some("media"));
        assert_eq!(vars.get("basename"), Some("cat pic.jpg:large"));
        assert_eq!(vars.get("filename"), Some("cat pic.jpg"));
        assert_eq!(vars.get("name"), Some("cat pic"));
        assert_eq!(vars.get("ext"), Some(".jpg"));
        assert_eq!(vars.get("mimeext"), Some(""));
        assert_eq!(vars.get("dispname"), Some(""));
    }

    #[test]
    fn disposition_variables_are_sanitized() {
        let vars = vars_for_url(
            "https://example.com/download",
            &guess(Some("../etc/passwd.txt"), None),
            "_",
        );
        assert_eq!(vars.get("disposition"), Some(".._etc_passwd.txt"));
        assert_eq!(vars.get("dispname"), Some(".._etc_passwd"));
        assert_eq!(vars.get("dispext"), Some(".txt"));
    }

    #[test]
    fn default_template_prefers_disposition() {
        let vars = vars_for_url(
            "https://example.com/get?id=7",
            &guess(Some("cat.jpeg"), Some(".jpg")),
            "_",
        );
        assert_eq!(plan_save_path(DEFAULT_TEMPLATE, &vars, "_").unwrap(), "cat.jpeg");
    }

    #[test]
    fn default_template_falls_back_to_mime_ext() {
        let vars = vars_for_url(
            "https://example.com/media/AbC123",
            &guess(None, Some(".png")),
            "_",
        );
        assert_eq!(plan_save_path(DEFAULT_TEMPLATE, &vars, "_").unwrap(), "AbC123.png");
    }

    #[test]
    fn user_variables_and_padding() {
        let mut vars = vars_for_url("https://example.com/a/b.gif", &FilenameGuess::default(), "_");
        vars.extend_from(&[("index", "3")].into_iter().collect());
        let path = plan_save_path("<host>/<###index>-<name><ext>", &vars, "_").unwrap();
        assert_eq!(path, "example.com/003-b.gif");
    }

    #[test]
    fn invalid_result_is_rejected() {
        let vars = vars_for_url("https://example.com/", &FilenameGuess::default(), "_");
        let err = plan_save_path(DEFAULT_TEMPLATE, &vars, "_").unwrap_err();
        assert_eq!(err, PlanError::InvalidPath { path: String::new() });
    }

    #[test]
    fn unparseable_url_is_treated_as_path() {
        let vars = vars_for_url("/local/dir/file.txt", &FilenameGuess::default(), "_");
        assert_eq!(vars.get("host"), Some(""));
        assert_eq!(vars.get("dir"), Some("local/dir"));
        assert_eq!(vars.get("filename"), Some("file.txt"));
    }
}
