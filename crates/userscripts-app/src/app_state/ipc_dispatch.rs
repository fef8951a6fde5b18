//! Hand web view messages to the bridge and outside links to the OS.

use url::Url;

use userscripts_bridge::Envelope;

use super::core::ShellApp;

impl ShellApp {
    /// Forward one `controller` envelope. The reply arrives on the outbound
    /// queue once the bridge has handled it.
    pub(super) fn handle_ipc_message(&self, body: &str) {
        let Some(envelope) = Envelope::from_json(body) else {
            tracing::warn!(body_len = body.len(), "IPC message rejected: not a controller envelope");
            return;
        };
        let Some(runtime) = &self.runtime else {
            tracing::debug!(id = envelope.id, "IPC message dropped during shutdown");
            return;
        };

        tracing::debug!(id = envelope.id, "IPC message dispatched");
        let _guard = runtime.enter();
        self.services.bridge.dispatch(envelope);
    }

    /// Open a link the navigation policy sent out of the app.
    pub(super) fn open_externally(&self, raw: &str) {
        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(url = raw, error = %e, "cannot open malformed link");
                return;
            }
        };
        let Some(runtime) = &self.runtime else {
            return;
        };

        let opener = std::sync::Arc::clone(&self.services.opener);
        runtime.spawn(async move {
            if let Err(e) = opener.open(&url).await {
                tracing::warn!(url = %url, error = %e, "failed to open link externally");
            }
        });
    }
}
