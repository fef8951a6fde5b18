//! Per-tick work: forward web view events, flush queued replies and pushes.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use userscripts_webview::WebViewEvent;

use super::core::ShellApp;

/// How often queued messages are exchanged with the web view.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl ShellApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.flush_outbound();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body),
                WebViewEvent::OpenExternal { url } => self.open_externally(&url),
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "page load");
                }
            }
        }
    }

    /// Evaluate every queued reply and push, in order.
    pub(super) fn flush_outbound(&mut self) {
        let Some(webview) = &self.webview else {
            return;
        };
        while let Ok(message) = self.services.outbound.try_recv() {
            webview.deliver(&message);
        }
    }
}
