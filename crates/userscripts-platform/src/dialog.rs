//! Native folder picker backed by `rfd`.

use std::path::{Path, PathBuf};

use tokio::sync::oneshot;
use tracing::{debug, warn};
use userscripts_bridge::{LocationPicker, PickerHandle, PickerOutcome, StorageLocation};

pub const DEFAULT_TITLE: &str = "Select Userscripts Directory";

/// Presents the OS folder chooser. Only directories can be selected.
#[derive(Debug, Clone)]
pub struct FolderDialog {
    title: String,
}

impl FolderDialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Default for FolderDialog {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl LocationPicker for FolderDialog {
    fn present(&self, initial_dir: &Path) -> PickerHandle {
        let (tx, rx) = oneshot::channel();
        let pick = rfd::AsyncFileDialog::new()
            .set_title(self.title.as_str())
            .set_directory(initial_dir)
            .pick_folder();

        tokio::spawn(async move {
            let picked = pick.await.map(|handle| handle.path().to_path_buf());
            if tx.send(outcome_for(picked)).is_err() {
                debug!("folder picker result arrived after the request was dropped");
            }
        });
        rx
    }
}

/// Map the dialog's answer onto a picker outcome.
fn outcome_for(picked: Option<PathBuf>) -> PickerOutcome {
    let Some(path) = picked else {
        return PickerOutcome::Cancelled;
    };
    match StorageLocation::from_directory(&path) {
        Ok(location) => PickerOutcome::Selected(location),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "picked folder cannot be stored");
            PickerOutcome::Cancelled
        }
    }
}
