//! Application configuration (stored in ~/.config/notekeep/config.toml)
//!
//! The only setting is a custom storage root. A missing or unreadable
//! config file means defaults, the same way a corrupt sidecar index does.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NoteError, Result};

const CONFIG_DIR: &str = "notekeep";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NOTEKEEP_CONFIG_DIR";

/// Default storage root, relative to the user's documents directory
const DEFAULT_STORAGE_SUBDIR: [&str; 2] = ["Notekeep", "Notes"];

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| NoteError::Other("unable to determine config directory".to_string()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults on any problem
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::debug!(error = %e, "no config location, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_dir = path
            .parent()
            .ok_or_else(|| NoteError::Other("invalid config path".to_string()))?;

        fs::create_dir_all(config_dir)
            .map_err(|e| NoteError::io_operation("create config directory", config_dir.display(), e))?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| NoteError::Other(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| NoteError::io_operation("write config", path.display(), e))?;

        Ok(())
    }

    /// The configured storage root, if one is set and still a directory
    pub fn custom_storage_dir(&self) -> Option<PathBuf> {
        let dir = PathBuf::from(self.storage_dir.as_deref()?.trim());
        if dir.is_dir() {
            Some(dir)
        } else {
            tracing::debug!(dir = %dir.display(), "configured storage root is gone, using default");
            None
        }
    }

    pub fn effective_storage_dir(&self) -> PathBuf {
        self.custom_storage_dir().unwrap_or_else(default_storage_dir)
    }

    /// Point the storage root at `dir`, or back to the default with `None`.
    ///
    /// A custom root must be an absolute path to an existing, writable directory.
    pub fn set_storage_dir(&mut self, dir: Option<&Path>) -> Result<()> {
        let Some(dir) = dir else {
            self.storage_dir = None;
            return Ok(());
        };

        if !dir.is_absolute() {
            return Err(NoteError::NotAbsolute {
                path: dir.to_path_buf(),
            });
        }
        if !dir.is_dir() {
            return Err(NoteError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        ensure_writable(dir)?;

        self.storage_dir = Some(dir.to_string_lossy().into_owned());
        Ok(())
    }

    /// Returns the source description for display purposes
    pub fn source_display() -> String {
        if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
            "custom config directory".to_string()
        } else {
            "~/.config/notekeep/config.toml".to_string()
        }
    }
}

/// Create and drop a scratch file in `dir`
fn ensure_writable(dir: &Path) -> Result<()> {
    tempfile::NamedTempFile::new_in(dir)
        .map(drop)
        .map_err(|e| {
            tracing::debug!(dir = %dir.display(), error = %e, "storage root rejected");
            NoteError::NotWritable {
                path: dir.to_path_buf(),
            }
        })
}

/// `<documents>/Notekeep/Notes`, or `./Notekeep/Notes` when there is no documents dir
pub fn default_storage_dir() -> PathBuf {
    let base = dirs::document_dir().unwrap_or_else(|| PathBuf::from("."));
    DEFAULT_STORAGE_SUBDIR
        .iter()
        .fold(base, |path, segment| path.join(segment))
}
