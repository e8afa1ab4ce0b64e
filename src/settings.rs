//! Client-local settings storage.
//!
//! The process-wide data-source selection persists across sessions in
//! `~/.clientele/settings.json`, the desktop analog of the original
//! dashboard's browser-local storage. Reads never fail: any problem loading
//! the file yields the defaults.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::context::DataSourceKind;

/// The settings directory name.
const SETTINGS_DIR: &str = ".clientele";

/// The settings file name.
const SETTINGS_FILE: &str = "settings.json";

/// Persisted client settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Which provider the dashboard reads from.
    #[serde(default)]
    pub data_source: DataSourceKind,
}

/// Manages settings storage and retrieval.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    /// Path to the settings file.
    settings_path: PathBuf,
}

impl SettingsManager {
    /// Create a manager rooted at the user's home directory.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let settings_path = home.join(SETTINGS_DIR).join(SETTINGS_FILE);
        Some(Self { settings_path })
    }

    /// Create a manager against an explicit file path (used by tests).
    pub fn with_path(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    /// Get the path to the settings file.
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    /// Load settings from the settings file.
    ///
    /// Returns defaults if the file doesn't exist or can't be read.
    pub fn load(&self) -> Settings {
        if !self.settings_path.exists() {
            return Settings::default();
        }

        let file = match File::open(&self.settings_path) {
            Ok(f) => f,
            Err(_) => return Settings::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(settings) => settings,
            Err(_) => Settings::default(),
        }
    }

    /// Save settings to the settings file.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns `true` if successful, `false` otherwise.
    pub fn save(&self, settings: &Settings) -> bool {
        if let Some(parent) = self.settings_path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let file = match File::create(&self.settings_path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, settings).is_err() {
            return false;
        }

        writer.flush().is_ok()
    }
}
