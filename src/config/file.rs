//! Configuration file loading.

use crate::config::{Config, validate_config};
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load and validate configuration from a TOML file.
///
/// A missing file yields the default config.
pub fn load_config_file(path: &Path) -> Result<Config> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents, path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let config = toml::from_str(contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from the platform config path.
///
/// Falls back to defaults when there is no config directory or file.
pub fn load_default_config() -> Result<Config> {
    match super::config_file_path() {
        Ok(path) => load_config_file(&path),
        Err(Error::ConfigDirNotFound) => {
            debug!("No config directory on this platform, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Validate `config` and write it to `path` as TOML.
///
/// The file is written to a sibling temporary and renamed into place, so an
/// interrupted write never leaves a truncated config behind.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    validate_config(config)?;
    let contents = toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;
    let write_error = |source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    let staging = path.with_extension("toml.tmp");
    std::fs::write(&staging, contents).map_err(write_error)?;
    std::fs::rename(&staging, path).map_err(write_error)
}

/// Save configuration to the platform config path, returning where it went.
pub fn save_default_config(config: &Config) -> Result<PathBuf> {
    let path = super::config_file_path()?;
    save_config(config, &path)?;
    debug!("Wrote config to {}", path.display());
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::ProviderKind;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let path = Path::new("/nonexistent/path/config.toml");
        let config = load_config_file(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[provider]
sample_rate = 22050
kind = "signal"
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.provider.sample_rate, 22_050);
        assert_eq!(config.provider.kind, ProviderKind::Signal);
        assert!(!config.provider.mono);
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_sample_rate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[provider]\nsample_rate = 10").unwrap();

        let result = load_config_file(file.path());
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.provider.mono = true;

        save_config(&config, &path).unwrap();
        assert_eq!(load_config_file(&path).unwrap(), config);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.provider.sample_rate = 10;

        let result = save_config(&config, &path);
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "stale").unwrap();

        save_config(&Config::default(), &path).unwrap();
        assert_eq!(load_config_file(&path).unwrap(), Config::default());
        let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config_file(dir.path());
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }
}
