use std::fs;
use std::path::Path;

use userscripts_common::PlatformError;

use super::resolve::{config_dir, data_dir};

/// Creates the config and data directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    create(&config_dir()?)?;
    create(&data_dir()?)?;
    Ok(())
}

fn create(dir: &Path) -> Result<(), PlatformError> {
    fs::create_dir_all(dir)
        .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))
}
