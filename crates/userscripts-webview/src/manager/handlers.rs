use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::navigation::{self, NavigationDecision};

use super::WebViewManager;

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| route(&events, url))
    }

    /// `target="_blank"` links never get a second window.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            if route(&events, url) {
                debug!("new window request ignored");
            }
            false
        })
    }
}

/// Apply the navigation policy. Returns whether the web view may proceed.
fn route(events: &Mutex<Vec<WebViewEvent>>, url: String) -> bool {
    match navigation::decide(&url) {
        NavigationDecision::Allow => {
            debug!(url = %url, "navigation allowed");
            true
        }
        NavigationDecision::OpenExternally => {
            info!(url = %url, "navigation leaves the app, opening externally");
            push(events, WebViewEvent::OpenExternal { url });
            false
        }
    }
}

fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}
