pub mod build;
pub mod clean;
pub mod init;

use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Resolve the `--config-file` argument to an absolute path.
fn config_path(config_file: Option<&PathBuf>) -> Result<PathBuf, std::io::Error> {
    let config_path = config_file
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG_FILE.into());
    if config_path.is_relative() {
        Ok(std::env::current_dir()?.join(&config_path))
    } else {
        Ok(config_path)
    }
}
