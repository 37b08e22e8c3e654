//! Capability interfaces for the coordinator's collaborators
//!
//! The coordinator is a reconciliation point between independently owned
//! pieces of state: the signaling layer's session state, the voice-call
//! state, the offload command path, and the per-role local data paths.
//! Each is injected as a trait object at construction so the coordinator
//! can be exercised deterministically without a live session.
//!
//! All methods are synchronous and must not block: entry points run to
//! completion on a single serialized event context, and offload completion
//! arrives as a later, separate call into the same coordinator.

use std::fmt;

use crate::types::{ControlAck, PeerAddr, Role, StreamOutcome, StreamStatus};

/// Session state owned by the signaling layer.
///
/// Read-only from the coordinator's perspective, except for
/// [`disconnect`](SignalingSession::disconnect), which hands the teardown
/// decision back to the layer that owns the session state machine.
pub trait SignalingSession: Send + Sync {
    /// Local role negotiated for the current session. Resolved fresh on
    /// every call; callers must not cache it across events.
    fn role(&self) -> Role;

    /// Whether hardware offload is the active execution mode.
    fn offload_enabled(&self) -> bool;

    /// Whether the stream is already in a started state.
    fn stream_started_ready(&self) -> bool;

    /// Tear down the session with the given peer.
    fn disconnect(&self, peer: PeerAddr);
}

/// Voice-call state, consulted only to veto an offload start.
pub trait CallMonitor: Send + Sync {
    /// True while a voice call is active.
    fn call_active(&self) -> bool;
}

/// Hardware-offload command path.
pub trait OffloadIssuer: Send + Sync {
    /// Send the hardware "begin streaming" command. Issued at most once
    /// per accepted start; completion arrives later through
    /// `StreamEventCoordinator::on_offload_started`.
    fn issue_start(&self);

    /// Report the conclusion of an offload start attempt to the
    /// hardware-start consumer.
    fn start_completed(&self, ack: ControlAck);

    /// Forward a stop status to the offload stop-acknowledgment path.
    fn stop_completed(&self, status: StreamStatus);

    /// Forward a suspend status to the offload suspend-acknowledgment path.
    fn suspend_completed(&self, status: StreamStatus);
}

/// Per-role local data path driver (software codec pump).
pub trait PathDriver: Send + Sync {
    /// Reset the path to idle after session teardown.
    fn on_idle(&self);

    /// The stream stopped; `None` when the event source produced no status.
    fn on_stopped(&self, outcome: Option<StreamOutcome>);

    /// The stream suspended; `None` when the event source produced no
    /// status.
    fn on_suspended(&self, outcome: Option<StreamOutcome>);

    /// Write diagnostic state to `w`.
    fn debug_dump(&self, w: &mut dyn fmt::Write) -> fmt::Result;
}

/// Capture-side driver; additionally owns codec setup for its peer.
pub trait SourceDriver: PathDriver {
    /// Ensure the codec is configured for `peer` before the data path runs.
    fn setup_codec(&self, peer: PeerAddr);
}

/// Negotiated-codec state, dump-only from this crate's perspective.
pub trait CodecState: Send + Sync {
    /// Write codec negotiation state to `w`.
    fn debug_dump(&self, w: &mut dyn fmt::Write) -> fmt::Result;
}

/// Control-channel acknowledgment sink.
///
/// Sends are fire-and-forget and must never block the event context. At
/// most one ack is delivered per pending local request; the serialized
/// event context guarantees no two entry points race on it.
pub trait AckChannel: Send + Sync {
    /// Deliver one acknowledgment code to the consumer.
    fn ack(&self, ack: ControlAck);
}
