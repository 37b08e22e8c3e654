//! Stream event funnel
//!
//! Signaling events and offload completions reach the coordinator through
//! one ordered queue. The loop here is that single serialized context:
//! every entry point runs to completion before the next event is taken,
//! which is what guarantees no two handlers race to acknowledge the same
//! pending request.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::coordinator::StreamEventCoordinator;
use crate::types::{PeerAddr, StartSignal, StreamOutcome, StreamStatus};

/// Events funneled into the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamEvent {
    /// The session went idle; reset the active local path.
    Idle,
    /// A start attempt resolved, or a local request awaits acknowledgment.
    Started {
        /// Remote party of the session.
        peer: PeerAddr,
        /// What the signaling layer knows about the start.
        signal: StartSignal,
        /// Whether a local operator-initiated start is awaiting ack.
        pending_start: bool,
    },
    /// The stream stopped.
    Stopped {
        /// Stop result; `None` when the event source produced no status.
        outcome: Option<StreamOutcome>,
    },
    /// The stream suspended.
    Suspended {
        /// Suspend result; `None` when the event source produced no status.
        outcome: Option<StreamOutcome>,
    },
    /// The offload hardware reported the result of a start command.
    OffloadStarted {
        /// Remote party of the session.
        peer: PeerAddr,
        /// Raw hardware status.
        status: StreamStatus,
    },
}

impl StreamEventCoordinator {
    /// Drain the serialized event queue, dispatching each event to its
    /// entry point. Runs until the sender side closes.
    pub async fn run_event_loop(self: Arc<Self>, mut event_rx: mpsc::Receiver<StreamEvent>) {
        tracing::info!("stream event loop started");

        while let Some(event) = event_rx.recv().await {
            self.dispatch(event);
        }

        tracing::info!("stream event loop ended");
    }

    /// Route one event to the matching entry point.
    pub fn dispatch(&self, event: StreamEvent) {
        match event {
            StreamEvent::Idle => self.on_idle(),
            StreamEvent::Started {
                peer,
                signal,
                pending_start,
            } => {
                let acked = self.on_started(peer, signal, pending_start);
                tracing::debug!(acked, "start event dispatched");
            }
            StreamEvent::Stopped { outcome } => self.on_stopped(outcome),
            StreamEvent::Suspended { outcome } => self.on_suspended(outcome),
            StreamEvent::OffloadStarted { peer, status } => self.on_offload_started(peer, status),
        }
    }
}
