//! Persisted storage for the chosen scripts directory.
//!
//! Single writer (a completed picker flow), many readers. Every `set`
//! replaces the previous value wholesale; nothing ever deletes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

use serde_json::{Map, Value};
use tracing::{debug, warn};
use userscripts_common::StoreError;

use crate::location::StorageLocation;

/// Preference key under which the directory reference is stored.
pub const SCRIPTS_DIRECTORY_KEY: &str = "scriptsDirectoryUrl";

pub trait LocationStore: Send + Sync {
    fn get(&self) -> Option<StorageLocation>;
    fn set(&self, location: StorageLocation) -> Result<(), StoreError>;
}

/// A JSON object on disk, shared with any other preferences the app keeps.
///
/// Writes go to a sibling `.tmp` file that is renamed over the original,
/// so readers see either the old object or the new one.
pub struct PreferencesFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PreferencesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Result<Map<String, Value>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        match serde_json::from_str(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(StoreError::Corrupt(self.path.clone())),
        }
    }

    fn write_object(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(map).map_err(|e| StoreError::Encode(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(io_error(&tmp_path))?;

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            // Rename over an existing file can fail on Windows
            warn!("atomic rename failed ({e}), falling back to direct write");
            fs::write(&self.path, &json).map_err(io_error(&self.path))?;
            let _ = fs::remove_file(&tmp_path);
        }
        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { path, source }
}

impl LocationStore for PreferencesFile {
    fn get(&self) -> Option<StorageLocation> {
        let map = match self.read_object() {
            Ok(map) => map,
            Err(e) => {
                warn!(error = %e, "preferences unreadable, treating scripts directory as unset");
                return None;
            }
        };
        let raw = map.get(SCRIPTS_DIRECTORY_KEY)?.as_str()?;
        match StorageLocation::parse(raw) {
            Ok(location) => Some(location),
            Err(e) => {
                warn!(value = raw, error = %e, "stored scripts directory is not a URL");
                None
            }
        }
    }

    fn set(&self, location: StorageLocation) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut map = match self.read_object() {
            Ok(map) => map,
            Err(StoreError::Corrupt(path)) => {
                warn!(path = %path.display(), "replacing corrupt preferences file");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(
            SCRIPTS_DIRECTORY_KEY.to_string(),
            Value::String(location.as_str().to_string()),
        );
        self.write_object(&map)?;

        debug!(path = %self.path.display(), location = %location, "scripts directory saved");
        Ok(())
    }
}

/// Process-local store; nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    slot: RwLock<Option<StorageLocation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(location: StorageLocation) -> Self {
        Self {
            slot: RwLock::new(Some(location)),
        }
    }
}

impl LocationStore for MemoryStore {
    fn get(&self) -> Option<StorageLocation> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, location: StorageLocation) -> Result<(), StoreError> {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(location);
        Ok(())
    }
}
