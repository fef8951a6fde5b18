//! The user's chosen scripts directory.
//!
//! Held as an absolute `file://` URL rather than a bare path, so the stored
//! value stays resolvable across restarts and does not depend on the
//! working directory of whichever process reads it.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::BridgeError;

/// Shown in place of a directory before the user has picked one.
pub const NOT_SET_PLACEHOLDER: &str = "Not set";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    url: Url,
}

impl StorageLocation {
    /// Reference an absolute directory path.
    pub fn from_directory(path: &Path) -> Result<Self, BridgeError> {
        Url::from_directory_path(path)
            .map(|url| Self { url })
            .map_err(|()| BridgeError::LocationMalformed(path.display().to_string()))
    }

    /// Wrap a previously stored reference without checking it.
    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw).map(Self::from_url)
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Local directory this reference resolves to, without a trailing
    /// separator.
    pub fn to_path(&self) -> Option<PathBuf> {
        if self.url.scheme() != "file" {
            return None;
        }
        let path = self.url.to_file_path().ok()?;
        Some(path.components().collect())
    }

    /// The form handed to the OS to reveal the directory in a file browser.
    pub fn external_url(&self) -> Result<Url, BridgeError> {
        match self.to_path() {
            Some(path) if path.is_absolute() => Ok(self.url.clone()),
            _ => Err(BridgeError::LocationMalformed(self.url.to_string())),
        }
    }

    /// Human-readable form shown in the UI. A leading `home` is shown as `~`.
    pub fn describe(&self, home: Option<&Path>) -> String {
        let Some(path) = self.to_path() else {
            return self.url.to_string();
        };
        if let Some(rest) = home.and_then(|h| path.strip_prefix(h).ok()) {
            if rest.as_os_str().is_empty() {
                return "~".to_string();
            }
            return Path::new("~").join(rest).display().to_string();
        }
        path.display().to_string()
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Describe an optional location, falling back to [`NOT_SET_PLACEHOLDER`].
pub fn describe(location: Option<&StorageLocation>, home: Option<&Path>) -> String {
    location
        .map(|l| l.describe(home))
        .unwrap_or_else(|| NOT_SET_PLACEHOLDER.to_string())
}

#[cfg(all(test, windows))]
mod windows_tests {
    use super::*;

    #[test]
    fn describe_uses_native_separators_under_home() {
        let home = Path::new(r"C:\Users\me");
        let loc = StorageLocation::from_directory(Path::new(r"C:\Users\me\a\b")).unwrap();
        assert_eq!(loc.describe(Some(home)), r"~\a\b");
    }
}
