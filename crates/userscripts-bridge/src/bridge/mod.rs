//! The message bridge: one entry point for every `controller` request.
//!
//! Each request moves through `received -> dispatching -> computing` (or
//! `suspended on picker` for `CHANGE_DIRECTORY`) and always ends with exactly
//! one reply. Failures become an error string in the reply; nothing here is
//! fatal and nothing is retried.

mod handlers;


use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::identity::IdentitySource;
use crate::location;
use crate::opener::ExternalOpener;
use crate::outbound::{Outbound, OutboundSink};
use crate::picker::LocationPicker;
use crate::protocol::{Command, Envelope, Reply};
use crate::store::LocationStore;

/// Collaborators wired in at construction. One bridge per web view.
pub struct BridgeDeps {
    pub store: Arc<dyn LocationStore>,
    pub picker: Arc<dyn LocationPicker>,
    pub opener: Arc<dyn ExternalOpener>,
    pub identity: Arc<dyn IdentitySource>,
    pub sink: Arc<dyn OutboundSink>,
}

pub struct MessageBridge {
    store: Arc<dyn LocationStore>,
    picker: Arc<dyn LocationPicker>,
    opener: Arc<dyn ExternalOpener>,
    identity: Arc<dyn IdentitySource>,
    sink: Arc<dyn OutboundSink>,
    /// Where the folder picker starts.
    picker_dir: PathBuf,
    /// Abbreviated to `~` in directory descriptions.
    home: Option<PathBuf>,
    /// The in-flight picker flow, if one is presented.
    picker_task: Mutex<Option<JoinHandle<()>>>,
}

impl MessageBridge {
    pub fn new(deps: BridgeDeps, picker_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: deps.store,
            picker: deps.picker,
            opener: deps.opener,
            identity: deps.identity,
            sink: deps.sink,
            picker_dir: picker_dir.into(),
            home: None,
            picker_task: Mutex::new(None),
        }
    }

    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    pub fn picker_dir(&self) -> &Path {
        &self.picker_dir
    }

    /// Answer one request body.
    pub async fn handle(&self, body: &Value) -> Reply {
        let command = match Command::parse(body) {
            Ok(command) => command,
            Err(e) => {
                warn!(body = %body, error = %e, "controller message rejected");
                return Reply::from(e);
            }
        };

        debug!(command = command.name(), "controller message dispatched");

        let outcome = match command {
            Command::Init => Ok(Some(self.init())),
            Command::ChangeDirectory => {
                self.change_directory();
                Ok(None)
            }
            Command::OpenDirectory => self.open_directory().await.map(|()| None),
        };

        match outcome {
            Ok(Some(value)) => Reply::data(value),
            Ok(None) => Reply::empty(),
            Err(e) => {
                warn!(command = command.name(), error = %e, "controller command failed");
                Reply::from(e)
            }
        }
    }

    /// Handle an envelope off the calling thread and queue its reply.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(self: &Arc<Self>, envelope: Envelope) -> JoinHandle<()> {
        let bridge = Arc::clone(self);
        tokio::spawn(async move {
            let reply = bridge.handle(&envelope.body).await;
            bridge.sink.deliver(Outbound::Reply {
                id: envelope.id,
                reply,
            });
        })
    }

    /// Display form of the stored directory, or the "not set" placeholder.
    pub fn directory_description(&self) -> String {
        location::describe(self.store.get().as_ref(), self.home.as_deref())
    }

    /// Wait for a presented picker to resolve and its effects to land.
    pub async fn wait_for_picker(&self) {
        let task = self.lock_picker_task().take();
        if let Some(task) = task {
            if let Err(e) = task.await {
                warn!(error = %e, "picker task ended abnormally");
            }
        }
    }

    /// Drop any in-flight picker flow without touching the store.
    pub fn abort_picker(&self) {
        if let Some(task) = self.lock_picker_task().take() {
            task.abort();
        }
    }

    fn lock_picker_task(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.picker_task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
