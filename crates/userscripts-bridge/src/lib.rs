//! Native side of the `controller` message channel.
//!
//! The web UI sends a bare command name and awaits one reply. This crate
//! owns that protocol and the state behind it:
//! - [`MessageBridge`] dispatches `INIT`, `CHANGE_DIRECTORY` and
//!   `OPEN_DIRECTORY`, producing exactly one [`Reply`] per request
//! - [`LocationStore`] persists the chosen scripts directory
//! - [`LocationPicker`], [`ExternalOpener`] and [`IdentitySource`] are the
//!   seams to OS capabilities, implemented by the platform crate
//! - [`Outbound`] carries replies and unsolicited pushes back to the
//!   event loop, which renders them into the web view

pub mod bridge;
pub mod error;
pub mod identity;
pub mod location;
pub mod opener;
pub mod outbound;
pub mod picker;
pub mod protocol;
pub mod store;

pub use bridge::{BridgeDeps, MessageBridge};
pub use error::BridgeError;
pub use identity::{AppIdentity, DescriptorFile, IdentitySource, StaticIdentity};
pub use location::{StorageLocation, NOT_SET_PLACEHOLDER};
pub use opener::ExternalOpener;
pub use outbound::{
    outbound_channel, Outbound, OutboundReceiver, OutboundSender, OutboundSink, PushMessage,
};
pub use picker::{LocationPicker, PickerHandle, PickerOutcome};
pub use protocol::{Command, Envelope, Reply};
pub use store::{LocationStore, MemoryStore, PreferencesFile, SCRIPTS_DIRECTORY_KEY};
