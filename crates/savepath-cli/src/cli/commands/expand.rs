//! `savepath expand <format>` – expand a template.

use anyhow::Result;
use savepath_core::template::{expand, VariableTable};

pub fn run_expand(format: &str, vars: &[(String, String)]) -> Result<()> {
    let table: VariableTable = vars.iter().map(|(k, v)| (k, v.as_str())).collect();
    println!("{}", expand(format, &table));
    Ok(())
}
