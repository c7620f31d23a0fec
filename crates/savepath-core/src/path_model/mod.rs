//! Path and filename helpers for `/`-delimited save paths.
//!
//! All functions are pure string operations and never fail; validity is
//! reported as a boolean verdict by [`is_valid_path`] and [`is_valid_filename`].

mod components;
mod sanitize;
mod validate;

pub use components::{basename, dirname, file_ext, file_part, filename};
pub use sanitize::{path_join, sanitize_filename, sanitize_path, DEFAULT_REPLACEMENT};
pub use validate::{is_valid_filename, is_valid_path};
