//! Reading and writing the settings file.
//!
//! The file lives at `~/.safezone/config.ini` unless a caller passes another
//! path. An absent file is not an error: every setting has a default in
//! [`super::defaults`], so a fresh install runs without one.

use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use super::settings::ConfigFile;

/// Name of the directory under the home directory that holds SafeZone files.
const CONFIG_DIR_NAME: &str = ".safezone";

/// File name of the settings file inside [`config_directory`].
const CONFIG_FILE_NAME: &str = "config.ini";

/// Errors from loading or saving the settings file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The file exists but is not valid INI
    #[error("Cannot read settings file: {0}")]
    Read(#[from] ini::Error),

    /// A section key holds a value the engine cannot use
    #[error("Invalid setting {section}.{key} = '{value}': {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Writing the file or creating its directory failed
    #[error("Cannot write settings file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConfigFile {
    /// Read settings from `path`, or the defaults when no file is there.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.is_file() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        super::parser::parse_ini(&Ini::load_from_file(path)?)
    }

    /// Write these settings to `path`, creating missing directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        let write_error = |source: io::Error| ConfigFileError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(write_error)?;
        }
        std::fs::write(path, self.to_ini_string()).map_err(write_error)
    }

    /// The commented INI text that [`ConfigFile::save_to`] writes.
    pub fn to_ini_string(&self) -> String {
        super::writer::to_config_string(self)
    }

    /// Write default settings to `path` unless a file is already there.
    ///
    /// Returns `true` when a new file was created.
    pub fn init_at(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }
}

/// `~/.safezone`, or `./.safezone` when no home directory is known.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// `~/.safezone/config.ini`.
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("absent.ini")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_saved_settings_load_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings/config.ini");

        let mut config = ConfigFile::default();
        config.monitor.debounce_ms = 750;
        config.monitor.high_accuracy = false;
        config.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded.monitor.debounce_ms, 750);
        assert!(!loaded.monitor.high_accuracy);
        assert_eq!(
            loaded.monitor.to_monitor_config().debounce,
            Duration::from_millis(750)
        );
    }

    #[test]
    fn test_unparseable_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[monitor\ndebounce_ms = 10\n").unwrap();

        let error = ConfigFile::load_from(&path).unwrap_err();
        assert!(matches!(error, ConfigFileError::Read(_)), "{:?}", error);
    }

    #[test]
    fn test_init_at_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");

        assert!(ConfigFile::init_at(&path).unwrap());
        assert!(std::fs::read_to_string(&path).unwrap().contains("[monitor]"));

        std::fs::write(&path, "[monitor]\ndebounce_ms = 10\n").unwrap();
        assert!(!ConfigFile::init_at(&path).unwrap());
        assert_eq!(ConfigFile::load_from(&path).unwrap().monitor.debounce_ms, 10);
    }

    #[test]
    fn test_write_error_carries_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("config.ini");

        let error = ConfigFile::default().save_to(&path).unwrap_err();
        assert!(matches!(error, ConfigFileError::Write { .. }));
        assert!(error.to_string().contains("taken"));
    }

    #[test]
    fn test_config_file_path() {
        assert!(config_file_path().ends_with(".safezone/config.ini"));
    }
}
