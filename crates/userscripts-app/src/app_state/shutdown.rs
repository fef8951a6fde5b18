//! Graceful shutdown: drop pending picker work, close the web view, stop the runtime.

use std::time::Duration;

use super::core::ShellApp;

impl ShellApp {
    /// Order matters: the picker task is aborted before the runtime stops so a
    /// late selection cannot be written during teardown.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.services.bridge.abort_picker();
        self.webview = None;

        if let Some(rt) = self.runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        tracing::info!("Graceful shutdown complete");
    }
}
