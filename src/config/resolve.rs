use std::path::{Component, Path, PathBuf};

/// Default config filename checked when no path is provided.
pub const DEFAULT_CONFIG_FILE: &str = "Appsetting.json";

/// Resolves a config path against a base directory.
///
/// `None` resolves [`DEFAULT_CONFIG_FILE`]. An absolute `path` replaces the
/// base. Resolution is purely lexical: `.` components are dropped and `..`
/// pops the previously resolved component without touching the filesystem,
/// so symlinks are not followed and existence is not checked here.
#[must_use]
pub fn resolve_config_path(base_dir: &Path, path: Option<&str>) -> PathBuf {
    normalize(&base_dir.join(path.unwrap_or(DEFAULT_CONFIG_FILE)))
}

fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                resolved.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                // `..` never climbs above a root or prefix.
                Some(Component::Prefix(_) | Component::RootDir) => {}
                Some(Component::CurDir | Component::ParentDir) | None => {
                    resolved.push(component.as_os_str());
                }
            },
            Component::Normal(part) => resolved.push(part),
        }
    }
    resolved
}
