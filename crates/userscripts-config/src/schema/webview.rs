//! Web view and bundled asset settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::non_empty;

/// Web view behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Enable the web inspector. On by default in debug builds.
    pub devtools: bool,
    /// Custom user agent. Empty keeps the engine default.
    pub user_agent: String,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: String::new(),
        }
    }
}

impl WebViewSettings {
    pub fn user_agent(&self) -> Option<&str> {
        non_empty(&self.user_agent)
    }
}

/// Location of the bundled web UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Asset root served under `userscripts://`. Empty means `./assets`.
    pub dir: String,
    /// Application descriptor (version/build JSON), relative to `dir`.
    pub descriptor: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            descriptor: "app.json".into(),
        }
    }
}

impl AssetsConfig {
    /// Resolve the asset root against `cwd`.
    pub fn resolve_dir(&self, cwd: &std::path::Path) -> PathBuf {
        match non_empty(&self.dir) {
            Some(dir) => cwd.join(dir),
            None => cwd.join("assets"),
        }
    }
}
