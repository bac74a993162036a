use std::path::{Path, PathBuf};

use crate::config::{load_config_from, resolve_config_path};
use crate::error::ConfigResult;

/// Runs the full loader pipeline against a file on disk.
///
/// # Errors
///
/// Returns an error when the resolved file is missing, unreadable, or not
/// valid JSON.
pub fn load_config_input(base_dir: &Path, path: Option<&str>) -> ConfigResult<()> {
    load_config_from(base_dir, path).map(|_| ())
}

/// Resolves a path to exercise lexical normalization.
#[must_use]
pub fn resolve_config_path_input(base_dir: &Path, path: Option<&str>) -> PathBuf {
    resolve_config_path(base_dir, path)
}
