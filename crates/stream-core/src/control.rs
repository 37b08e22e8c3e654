//! Control-channel acknowledgment delivery
//!
//! The audio pipeline above this crate waits on a control channel for the
//! outcome of its requests. Delivery here is fire-and-forget over an
//! unbounded mpsc sender so the event context never blocks; if the
//! consumer has gone away the send is logged and dropped, never retried.

use tokio::sync::mpsc;

use crate::api::AckChannel;
use crate::errors::{Result, StreamCoreError};
use crate::types::ControlAck;

/// Sender half of the control acknowledgment channel.
#[derive(Debug, Clone)]
pub struct ControlAckSender {
    tx: mpsc::UnboundedSender<ControlAck>,
}

/// Create the control acknowledgment channel: the coordinator-facing
/// sender and the receiver the audio pipeline consumes.
pub fn control_ack_channel() -> (ControlAckSender, mpsc::UnboundedReceiver<ControlAck>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ControlAckSender { tx }, rx)
}

impl ControlAckSender {
    /// Deliver an ack, reporting a closed receiver to the caller instead
    /// of swallowing it.
    pub fn try_ack(&self, ack: ControlAck) -> Result<()> {
        self.tx
            .send(ack)
            .map_err(|_| StreamCoreError::AckChannelClosed)
    }
}

impl AckChannel for ControlAckSender {
    fn ack(&self, ack: ControlAck) {
        if self.tx.send(ack).is_err() {
            tracing::warn!(?ack, "control ack dropped, receiver gone");
        }
    }
}
