//! Input parsing and output rendering around the matching engine.

pub mod input;
pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a UTF-8 file with path context on failure.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write a UTF-8 file with path context on failure.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
