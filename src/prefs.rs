//! Player preferences
//!
//! A single dark-mode flag, read once at start-up and written on every
//! toggle. The round engine does not depend on this module.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to access preferences at {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid preferences file {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Persisted settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

/// Get/set access to the dark-mode slot
pub trait PreferenceStore {
    fn dark_mode(&self) -> bool;

    /// Store the flag
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set_dark_mode(&mut self, enabled: bool) -> Result<(), PrefsError>;
}

/// Preferences kept in a JSON file
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    prefs: Preferences,
}

impl FilePreferences {
    /// Read preferences from `path`; a missing file gives the defaults
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let prefs = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| PrefsError::Json {
                path: path.display().to_string(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Preferences::default(),
            Err(source) => {
                return Err(PrefsError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        Ok(Self { path, prefs })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PrefsError> {
        let json = serde_json::to_string_pretty(&self.prefs).map_err(|source| PrefsError::Json {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| PrefsError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    fn set_dark_mode(&mut self, enabled: bool) -> Result<(), PrefsError> {
        self.prefs.dark_mode = enabled;
        self.save()
    }
}

/// In-process preferences that are never written anywhere
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    prefs: Preferences,
}

impl PreferenceStore for MemoryPreferences {
    fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    fn set_dark_mode(&mut self, enabled: bool) -> Result<(), PrefsError> {
        self.prefs.dark_mode = enabled;
        Ok(())
    }
}
