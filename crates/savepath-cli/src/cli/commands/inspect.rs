//! `savepath inspect <path>` – show path components and validity.

use anyhow::Result;
use savepath_core::path_model::{
    basename, dirname, file_ext, file_part, filename, is_valid_filename, is_valid_path,
};

pub fn run_inspect(path: &str) -> Result<()> {
    println!("{:<16} {}", "basename", basename(path));
    println!("{:<16} {}", "filename", filename(path));
    println!("{:<16} {}", "file part", file_part(path));
    println!("{:<16} {}", "extension", file_ext(path));
    println!("{:<16} {}", "dirname", dirname(path));
    println!("{:<16} {}", "valid path", is_valid_path(path));
    println!("{:<16} {}", "valid filename", is_valid_filename(path));
    Ok(())
}
