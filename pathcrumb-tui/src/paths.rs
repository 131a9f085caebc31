//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "pathcrumb";
const APPLICATION: &str = "pathcrumb";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/pathcrumb` or `~/.cache/pathcrumb`
/// - macOS: `~/Library/Caches/dev.pathcrumb.pathcrumb`
/// - Windows: `C:\Users\<User>\AppData\Local\pathcrumb\pathcrumb\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory for configuration files.
///
/// - Linux: `$XDG_CONFIG_HOME/pathcrumb` or `~/.config/pathcrumb`
/// - macOS: `~/Library/Application Support/dev.pathcrumb.pathcrumb`
/// - Windows: `C:\Users\<User>\AppData\Roaming\pathcrumb\pathcrumb\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the breadcrumb configuration file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the path to the latest log file, creating its directory.
pub fn log_file() -> Option<PathBuf> {
    let dir = cache_dir()?;
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("latest.log"))
}
