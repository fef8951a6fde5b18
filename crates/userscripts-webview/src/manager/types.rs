/// Configuration for creating the web view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Painted before the first frame of the page arrives.
    pub background: Option<(u8, u8, u8, u8)>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: super::start_url(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            background: Some((0x2f, 0x33, 0x37, 0xff)),
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
