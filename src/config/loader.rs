use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConfigError, ConfigResult};

use super::resolve::resolve_config_path;

/// Loads a config file as a generic JSON value.
///
/// Relative paths, and the default filename when `path` is `None`, resolve
/// against the process working directory at call time.
///
/// # Errors
///
/// Returns an error when the working directory cannot be determined, the
/// resolved file does not exist, cannot be read as UTF-8 text, or does not
/// parse as JSON.
pub fn load_config(path: Option<&str>) -> ConfigResult<Value> {
    load_config_from(&current_dir()?, path)
}

/// Loads a config file as a generic JSON value, resolving relative paths
/// against `base_dir`.
///
/// # Errors
///
/// Returns an error when the resolved file does not exist, cannot be read
/// as UTF-8 text, or does not parse as JSON.
pub fn load_config_from(base_dir: &Path, path: Option<&str>) -> ConfigResult<Value> {
    load_config_from_as(base_dir, path)
}

/// Loads a config file and decodes it into `T`.
///
/// Same pipeline as [`load_config`]; the caller supplies the target shape
/// and serde performs the decoding. No validation beyond the decode itself
/// is applied.
///
/// # Errors
///
/// Returns an error when the working directory cannot be determined, the
/// resolved file does not exist, cannot be read as UTF-8 text, or does not
/// decode into `T`.
pub fn load_config_as<T>(path: Option<&str>) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    load_config_from_as(&current_dir()?, path)
}

/// Loads a config file and decodes it into `T`, resolving relative paths
/// against `base_dir`.
///
/// # Errors
///
/// Returns an error when the resolved file does not exist, cannot be read
/// as UTF-8 text, or does not decode into `T`.
pub fn load_config_from_as<T>(base_dir: &Path, path: Option<&str>) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let resolved = resolve_config_path(base_dir, path);
    let content = read_config_file(&resolved)?;
    serde_json::from_str(&content).map_err(|err| ConfigError::ParseJson {
        path: resolved,
        source: err,
    })
}

fn read_config_file(path: &Path) -> ConfigResult<String> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), "reading config file");

    // The handle is scoped to the read; a delete race after the existence
    // check surfaces here as a generic read error.
    std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })
}

fn current_dir() -> ConfigResult<PathBuf> {
    std::env::current_dir().map_err(|err| ConfigError::CurrentDir { source: err })
}
