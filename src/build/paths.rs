//! Path conversion utilities.
//!
//! This module handles conversions between:
//! - Config paths (relative to the config file's directory)
//! - Source file paths (relative paths within the input tree)
//! - Output file paths (where files are written in the output directory)

use std::path::{Path, PathBuf};

/// Swap a document's extension for the output extension.
///
/// # Examples
/// ```ignore
/// output_relative_path("index.md", "html") => "index.html"
/// output_relative_path("guides/setup.md", "html") => "guides/setup.html"
/// ```
pub fn output_relative_path(path: &Path, output_ext: &str) -> PathBuf {
    path.with_extension(output_ext)
}

/// Resolve a configured path against the base path unless it is absolute.
pub fn resolve_path(base_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Get the base path from a config file path (its parent directory).
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
