use std::path::PathBuf;

use userscripts_common::PlatformError;

pub(super) const APP_NAME: &str = "userscripts";

/// Folder created under the user's documents directory for scripts.
const SCRIPTS_FOLDER: &str = "Userscripts";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/userscripts`
/// - Linux: `$XDG_CONFIG_HOME/userscripts` (defaults to `~/.config/userscripts`)
/// - Windows: `%APPDATA%\userscripts`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/userscripts`
/// - Linux: `$XDG_DATA_HOME/userscripts` (defaults to `~/.local/share/userscripts`)
/// - Windows: `%APPDATA%\userscripts`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path of the preferences file holding the scripts directory.
///
/// Located at `config_dir()/preferences.json`.
pub fn preferences_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("preferences.json"))
}

/// Where the folder picker starts when nothing else is configured.
///
/// `~/Documents/Userscripts` when a documents directory exists, otherwise
/// `data_dir()/scripts`.
pub fn default_scripts_dir() -> Result<PathBuf, PlatformError> {
    match dirs::document_dir() {
        Some(docs) => Ok(docs.join(SCRIPTS_FOLDER)),
        None => Ok(data_dir()?.join("scripts")),
    }
}

/// The user's home directory, if the platform reports one.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}
