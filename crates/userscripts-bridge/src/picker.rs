//! Seam to the native folder picker.
//!
//! Presenting the picker and learning the user's choice are decoupled: the
//! request that opened it is answered right away, and the choice arrives
//! later on a one-shot channel.

use std::path::Path;

use tokio::sync::oneshot;

use crate::location::StorageLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(StorageLocation),
    /// Dismissed without a choice. Not an error.
    Cancelled,
}

/// Resolves once, when the user confirms or dismisses the picker.
pub type PickerHandle = oneshot::Receiver<PickerOutcome>;

pub trait LocationPicker: Send + Sync {
    /// Show a folder-only picker starting at `initial_dir`.
    fn present(&self, initial_dir: &Path) -> PickerHandle;
}

/// Wait for the user. A picker that goes away without answering counts
/// as cancelled.
pub async fn outcome(handle: PickerHandle) -> PickerOutcome {
    handle.await.unwrap_or(PickerOutcome::Cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dropped_sender_is_cancelled() {
        let (tx, rx) = oneshot::channel::<PickerOutcome>();
        drop(tx);
        assert_eq!(outcome(rx).await, PickerOutcome::Cancelled);
    }

    #[tokio::test]
    async fn selection_is_forwarded() {
        let dir = tempfile::tempdir().unwrap();
        let location = StorageLocation::from_directory(dir.path()).unwrap();
        let (tx, rx) = oneshot::channel();
        tx.send(PickerOutcome::Selected(location.clone())).unwrap();
        assert_eq!(outcome(rx).await, PickerOutcome::Selected(location));
    }
}
