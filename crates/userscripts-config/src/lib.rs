//! Configuration for the Userscripts shell.
//!
//! TOML-based configuration with serde defaults for every field, so a
//! missing or partial `config.toml` works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use userscripts_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.window.title);
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

use std::path::Path;

pub use colors::Rgba;
pub use schema::{ShellConfig, CONFIG_SCHEMA_VERSION};

use userscripts_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error rather than a
/// reason to write the template.
pub fn load_config_from(path: &Path) -> Result<ShellConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&ShellConfig::default());
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"webview\""));
        assert!(json.contains("\"assets\""));
        assert!(json.contains("\"storage\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/nonexistent_userscripts_cfg.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nwidth = 12\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.logging.level, schema::LogLevel::Debug);
        assert_eq!(config.window.title, "Userscripts");
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
