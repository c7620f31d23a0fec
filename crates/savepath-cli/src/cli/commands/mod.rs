//! CLI command handlers. Each command is in its own file.

mod expand;
mod inspect;
mod name;
mod probe;
mod sanitize;

pub use expand::run_expand;
pub use inspect::run_inspect;
pub use name::run_name;
pub use probe::run_probe;
pub use sanitize::run_sanitize;
