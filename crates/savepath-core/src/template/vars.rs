use std::collections::HashMap;

/// Variable table for [`expand`](super::expand). Keys are lower-cased on insert,
/// so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    vars: HashMap<String, String>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `name`. An empty `value` still counts as present.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.vars.insert(name.as_ref().to_lowercase(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Copies every entry of `other` into `self`, replacing existing keys.
    pub fn extend_from(&mut self, other: &VariableTable) {
        for (k, v) in &other.vars {
            self.vars.insert(k.clone(), v.clone());
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = VariableTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}
