//! Messages travelling from native code back into the web view.
//!
//! Replies and pushes share one queue so a push can never overtake the
//! reply that was sent before it. The event loop drains the queue and
//! turns each message into a script evaluation.

use tokio::sync::mpsc;
use tracing::debug;

use crate::protocol::Reply;

/// Unsolicited notifications, not tied to any pending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushMessage {
    /// The scripts directory changed; carries its display form.
    DirectoryChanged(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    Reply { id: u64, reply: Reply },
    Push(PushMessage),
}

pub trait OutboundSink: Send + Sync {
    fn deliver(&self, message: Outbound);
}

pub type OutboundSender = mpsc::UnboundedSender<Outbound>;
pub type OutboundReceiver = mpsc::UnboundedReceiver<Outbound>;

pub fn outbound_channel() -> (OutboundSender, OutboundReceiver) {
    mpsc::unbounded_channel()
}

impl OutboundSink for OutboundSender {
    fn deliver(&self, message: Outbound) {
        if let Err(e) = mpsc::UnboundedSender::send(self, message) {
            debug!(message = ?e.0, "outbound queue closed, message dropped");
        }
    }
}
