//! Hands URLs to the operating system's default handler.

use async_trait::async_trait;
use tracing::info;
use url::Url;
use userscripts_bridge::ExternalOpener;
use userscripts_common::PlatformError;

/// Opens URLs with the desktop's registered handler: the file manager for
/// `file://` URLs, the browser for web links.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

#[async_trait]
impl ExternalOpener for SystemOpener {
    async fn open(&self, url: &Url) -> Result<(), PlatformError> {
        let target = launch_target(url);
        info!(target = %target, "opening externally");
        tokio::task::spawn_blocking(move || open::that(&target))
            .await
            .map_err(|e| PlatformError::OpenError(e.to_string()))?
            .map_err(|e| PlatformError::OpenError(e.to_string()))
    }
}

/// What `open::that` receives. Local directories are passed as paths,
/// which every file manager accepts; everything else as the URL string.
fn launch_target(url: &Url) -> String {
    if url.scheme() == "file" {
        if let Ok(path) = url.to_file_path() {
            return path.display().to_string();
        }
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_links_pass_through() {
        let url = Url::parse("https://example.com/docs?q=1").unwrap();
        assert_eq!(launch_target(&url), "https://example.com/docs?q=1");
    }

    #[test]
    fn mailto_passes_through() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(launch_target(&url), "mailto:someone@example.com");
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_become_paths() {
        let url = Url::parse("file:///Docs/my%20scripts/").unwrap();
        assert_eq!(launch_target(&url), "/Docs/my scripts/");
    }
}
