//! Platform-specific configuration paths.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;

/// Get the configuration directory for the current platform.
///
/// - Linux: `~/.config/wavewin/`
/// - macOS: `~/Library/Application Support/wavewin/`
/// - Windows: `%APPDATA%\wavewin\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the config file.
///
/// `WAVEWIN_CONFIG` takes precedence over the platform directory.
pub fn config_file_path() -> Result<PathBuf> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV))
}

fn resolve_config_path(override_path: Option<OsString>) -> Result<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(config_dir()?.join(CONFIG_FILE_NAME)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let path = resolve_config_path(Some(OsString::from("/tmp/custom.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        // Headless CI may lack a home directory; only check when one resolves.
        if let Ok(path) = resolve_config_path(Some(OsString::new())) {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.to_string_lossy().ends_with(CONFIG_FILE_NAME));
        }
    }
}
