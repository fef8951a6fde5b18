//! Per-command behavior.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::BridgeError;
use crate::location::StorageLocation;
use crate::outbound::{Outbound, OutboundSink, PushMessage};
use crate::picker::{self, PickerHandle, PickerOutcome};
use crate::store::LocationStore;

use super::MessageBridge;

#[derive(Serialize)]
struct InitPayload {
    build: String,
    version: String,
    directory: String,
}

impl MessageBridge {
    /// `INIT`: never fails.
    pub(super) fn init(&self) -> Value {
        let identity = self.identity.identity();
        let payload = InitPayload {
            build: identity.build,
            version: identity.version,
            directory: self.directory_description(),
        };
        serde_json::to_value(payload).unwrap_or(Value::Null)
    }

    /// `CHANGE_DIRECTORY`: present the picker and return without waiting.
    pub(super) fn change_directory(&self) {
        let mut slot = self.lock_picker_task();
        if slot.as_ref().is_some_and(|task| !task.is_finished()) {
            debug!("picker already presented, ignoring repeat request");
            return;
        }

        info!(initial_dir = %self.picker_dir.display(), "presenting scripts directory picker");
        let handle = self.picker.present(&self.picker_dir);
        *slot = Some(tokio::spawn(finish_pick(
            handle,
            Arc::clone(&self.store),
            Arc::clone(&self.sink),
            self.home.clone(),
        )));
    }

    /// `OPEN_DIRECTORY`: reveal the stored directory in the file browser.
    pub(super) async fn open_directory(&self) -> Result<(), BridgeError> {
        let location = self.store.get().ok_or(BridgeError::LocationUnset)?;
        let url = location.external_url()?;

        // The reply only reports whether the reference was usable
        if let Err(e) = self.opener.open(&url).await {
            warn!(url = %url, error = %e, "failed to open scripts directory");
        }
        Ok(())
    }
}

/// Apply the user's choice: persist it, then push the new description.
async fn finish_pick(
    handle: PickerHandle,
    store: Arc<dyn LocationStore>,
    sink: Arc<dyn OutboundSink>,
    home: Option<PathBuf>,
) {
    let location: StorageLocation = match picker::outcome(handle).await {
        PickerOutcome::Selected(location) => location,
        PickerOutcome::Cancelled => {
            info!("scripts directory picker cancelled");
            return;
        }
    };

    if let Err(e) = store.set(location.clone()) {
        error!(location = %location, error = %e, "failed to save scripts directory");
        return;
    }

    let description = location.describe(home.as_deref());
    info!(directory = %description, "scripts directory changed");
    sink.deliver(Outbound::Push(PushMessage::DirectoryChanged(description)));
}
