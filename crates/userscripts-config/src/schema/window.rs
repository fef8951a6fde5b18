//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Native window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 320-7680).
    pub width: u32,
    /// Initial logical height (valid range: 240-4320).
    pub height: u32,
    /// Background shown behind the web view while it loads.
    pub background: String,
    /// Let the web page draw its own (possibly translucent) background.
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Userscripts".into(),
            width: 1024,
            height: 768,
            background: "#2f3337".into(),
            transparent: false,
        }
    }
}
