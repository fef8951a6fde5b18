use tracing::warn;
use userscripts_bridge::Outbound;
use wry::WebView;

/// Handle to the live web view.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    /// URL loaded at creation.
    pub(super) current_url: String,
}

impl WebViewHandle {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Deliver a reply or push to the page.
    pub fn deliver(&self, message: &Outbound) {
        let script = crate::ipc::js_outbound(message);
        if let Err(e) = self.webview.evaluate_script(&script) {
            warn!(error = %e, "failed to deliver controller message");
        }
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
