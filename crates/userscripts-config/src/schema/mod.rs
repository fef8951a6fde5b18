//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod storage;
mod webview;
mod window;

pub use logging::*;
pub use storage::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub webview: WebViewSettings,
    pub assets: AssetsConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Treat an empty string as "unset".
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
