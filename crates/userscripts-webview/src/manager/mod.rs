//! WebView creation and event collection.
//!
//! `WebViewManager` owns the content provider for the custom protocol and
//! the event sink the wry callbacks push into. The app drains the sink
//! once per poll tick.

use std::sync::{Arc, Mutex, PoisonError};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use lifecycle::{start_url, SCHEME};
pub use types::WebViewConfig;

pub struct WebViewManager {
    /// Event sink; events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Serves the `userscripts://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Set the content provider for serving bundled assets.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PageLoadState;

    #[test]
    fn drain_empties_the_sink() {
        let manager = WebViewManager::new();
        manager.events.lock().unwrap().push(WebViewEvent::PageLoad {
            state: PageLoadState::Finished,
            url: "userscripts://localhost/".into(),
        });
        manager.events.lock().unwrap().push(WebViewEvent::IpcMessage {
            body: r#"{"id":1,"body":"INIT"}"#.into(),
        });

        let drained = manager.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[1], WebViewEvent::IpcMessage { .. }));
        assert!(manager.drain_events().is_empty());
    }
}
