//! Parsing and resolution of a single placeholder body.

use super::VariableTable;

/// One `|`-separated choice inside a placeholder: `##name` has `pad == 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Alternative<'a> {
    pub pad: usize,
    pub name: &'a str,
}

impl<'a> Alternative<'a> {
    fn parse(raw: &'a str) -> Self {
        let name = raw.trim_start_matches('#');
        Self {
            pad: raw.len() - name.len(),
            name,
        }
    }
}

/// Splits a placeholder body (the text between `<` and `>`) into alternatives.
///
/// Always yields at least one alternative, possibly with an empty name.
pub(super) fn parse_alternatives(body: &str) -> Vec<Alternative<'_>> {
    body.split('|').map(Alternative::parse).collect()
}

/// Resolves a placeholder body against `vars`.
pub(super) fn resolve(body: &str, vars: &VariableTable) -> String {
    for alt in parse_alternatives(body) {
        match vars.get(alt.name) {
            None => return alt.name.to_string(),
            Some(value) if !value.is_empty() => return pad_left(value, alt.pad),
            Some(_) => continue,
        }
    }
    String::new()
}

fn pad_left(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut out = "0".repeat(width - len);
    out.push_str(value);
    out
}
