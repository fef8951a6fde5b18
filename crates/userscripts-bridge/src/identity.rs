//! Application version and build number.
//!
//! Read on every `INIT` from whatever describes the packaged app; never
//! cached, so a replaced descriptor shows up without a restart.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_VERSION: &str = "0.0.0";
pub const DEFAULT_BUILD: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppIdentity {
    pub version: String,
    pub build: String,
}

impl AppIdentity {
    /// Missing or blank values fall back to `0.0.0` / `0`.
    pub fn from_parts(version: Option<&str>, build: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            version: pick(version, DEFAULT_VERSION),
            build: pick(build, DEFAULT_BUILD),
        }
    }
}

impl Default for AppIdentity {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}

pub trait IdentitySource: Send + Sync {
    fn identity(&self) -> AppIdentity;
}

/// Values fixed at construction, typically from `env!` at compile time.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    version: Option<String>,
    build: Option<String>,
}

impl StaticIdentity {
    pub fn new(version: Option<&str>, build: Option<&str>) -> Self {
        Self {
            version: version.map(String::from),
            build: build.map(String::from),
        }
    }
}

impl IdentitySource for StaticIdentity {
    fn identity(&self) -> AppIdentity {
        AppIdentity::from_parts(self.version.as_deref(), self.build.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
struct Descriptor {
    version: Option<String>,
    build: Option<String>,
}

/// A JSON descriptor shipped with the bundled assets:
/// `{"version": "4.5.0", "build": "71"}`.
#[derive(Debug, Clone)]
pub struct DescriptorFile {
    path: PathBuf,
}

impl DescriptorFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Descriptor {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "app descriptor unreadable");
                return Descriptor::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            debug!(path = %self.path.display(), error = %e, "app descriptor malformed");
            Descriptor::default()
        })
    }
}

impl IdentitySource for DescriptorFile {
    fn identity(&self) -> AppIdentity {
        let descriptor = self.read();
        AppIdentity::from_parts(descriptor.version.as_deref(), descriptor.build.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_known() {
        let id = StaticIdentity::default().identity();
        assert_eq!(id.version, "0.0.0");
        assert_eq!(id.build, "0");
    }

    #[test]
    fn blank_values_fall_back() {
        let id = AppIdentity::from_parts(Some("  "), Some(""));
        assert_eq!(id, AppIdentity::default());
    }

    #[test]
    fn static_values_pass_through() {
        let id = StaticIdentity::new(Some("4.5.0"), Some("71")).identity();
        assert_eq!(id.version, "4.5.0");
        assert_eq!(id.build, "71");
    }

    #[test]
    fn descriptor_is_read_on_every_query() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        let source = DescriptorFile::new(&path);

        assert_eq!(source.identity(), AppIdentity::default());

        std::fs::write(&path, r#"{"version": "1.2.3", "build": "9"}"#).unwrap();
        assert_eq!(source.identity().version, "1.2.3");

        std::fs::write(&path, r#"{"version": "1.2.4"}"#).unwrap();
        let id = source.identity();
        assert_eq!(id.version, "1.2.4");
        assert_eq!(id.build, "0");
    }

    #[test]
    fn malformed_descriptor_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        std::fs::write(&path, "version = 1").unwrap();
        assert_eq!(DescriptorFile::new(&path).identity(), AppIdentity::default());
    }
}
