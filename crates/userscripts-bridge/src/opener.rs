use async_trait::async_trait;
use url::Url;
use userscripts_common::PlatformError;

/// Hands a URL to the operating system's default handler.
#[async_trait]
pub trait ExternalOpener: Send + Sync {
    async fn open(&self, url: &Url) -> Result<(), PlatformError>;
}
