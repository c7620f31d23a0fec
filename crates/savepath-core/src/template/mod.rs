//! Flat `<...>` placeholder substitution.
//!
//! A placeholder lists one or more `|`-separated alternatives, each optionally
//! prefixed by `#` characters for zero padding: `<###index>`, `<title|name>`.
//! There are no loops, conditionals or nesting.

mod placeholder;
mod vars;

pub use vars::VariableTable;

/// Expands every `<...>` placeholder in `format` using `vars`.
///
/// Text outside placeholders is copied as-is. A `<` with no closing `>` and
/// an empty `<>` are not placeholders and are copied verbatim.
///
/// # Examples
///
/// - `expand("<##idx>", {idx: "7"})` → `"07"`
/// - `expand("<a|b>", {b: "y"})` → `"a"` (`a` is not a key, so it is literal text)
pub fn expand(format: &str, vars: &VariableTable) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('>') {
            Some(0) => {
                // `<>` is literal; rescan from the `>`.
                out.push('<');
                rest = after_open;
            }
            Some(close) => {
                out.push_str(&placeholder::resolve(&after_open[..close], vars));
                rest = &after_open[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
