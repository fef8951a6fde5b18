//! Script storage settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::non_empty;

/// Where the chosen scripts directory is remembered, and how the
/// folder picker is presented.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Preferences file. Empty uses the platform config directory.
    pub preferences_file: String,
    /// Initial folder shown by the picker. Empty uses the platform
    /// documents directory.
    pub default_directory: String,
    pub picker_title: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_file: String::new(),
            default_directory: String::new(),
            picker_title: "Select Userscripts Directory".into(),
        }
    }
}

impl StorageConfig {
    pub fn preferences_file(&self) -> Option<PathBuf> {
        non_empty(&self.preferences_file).map(PathBuf::from)
    }

    pub fn default_directory(&self) -> Option<PathBuf> {
        non_empty(&self.default_directory).map(PathBuf::from)
    }
}
