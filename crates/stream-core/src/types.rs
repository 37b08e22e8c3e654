//! Core data model for stream-session coordination
//!
//! These types describe what the signaling layer and the offload hardware
//! report into the coordinator, and what the coordinator reports back on
//! the control channel. They are transient values passed through per event;
//! the coordinator owns none of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque fixed-size address token identifying the remote party of a
/// session. Passed through to collaborators, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerAddr([u8; 6]);

impl PeerAddr {
    /// Create a peer address from its raw octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Raw octets of the address.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for PeerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

/// Local streaming role negotiated for the current session.
///
/// The role is only meaningful once negotiation for this session instance
/// has completed, so it is queried fresh on every event and never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// This endpoint captures and sends audio.
    Source,
    /// This endpoint receives and renders audio.
    Sink,
    /// Negotiation has not resolved a role yet.
    #[default]
    Unknown,
}

/// Which side drove a start attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Initiator {
    /// The local operator requested the start.
    Local,
    /// The remote peer started the stream.
    Remote,
}

/// Raw status reported by the protocol layer or the offload hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamStatus {
    /// The request succeeded.
    Success,
    /// The hardware or stack ran out of resources for the request.
    NoResources,
    /// Any other failure.
    Failed,
}

impl StreamStatus {
    /// True for [`StreamStatus::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, StreamStatus::Success)
    }
}

/// How a start attempt concluded, as reported by the signaling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartOutcome {
    /// Terminal status of the attempt.
    pub status: StreamStatus,
    /// A suspend was already in flight when the start resolved. A start
    /// report that is simultaneously suspending is a race to be ignored;
    /// the terminal suspend event arrives separately.
    pub suspending: bool,
    /// Which side drove the start.
    pub initiator: Initiator,
}

impl StartOutcome {
    /// Create a start outcome record.
    pub const fn new(status: StreamStatus, suspending: bool, initiator: Initiator) -> Self {
        Self {
            status,
            suspending,
            initiator,
        }
    }
}

/// Result record for a stop or suspend event.
///
/// The event source cannot always produce one; absence is expressed with
/// `Option<StreamOutcome>` at the entry-point boundary and must be treated
/// distinctly from a present-but-failed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamOutcome {
    /// Terminal status of the stop or suspend.
    pub status: StreamStatus,
}

impl StreamOutcome {
    /// Create a stop/suspend outcome record.
    pub const fn new(status: StreamStatus) -> Self {
        Self { status }
    }
}

/// What the signaling layer knows about a start when it reaches the
/// coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartSignal {
    /// A local start request with no protocol confirmation available yet.
    /// The coordinator must resolve it so the requester is never left
    /// waiting on the control channel.
    RequestOnly,
    /// The protocol layer resolved the start attempt.
    Confirmed(StartOutcome),
}

/// Acknowledgment codes delivered to the audio-pipeline control channel.
///
/// The discriminants are the control-channel contract with the consumer
/// above this crate and must not be renumbered or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ControlAck {
    /// The request completed successfully.
    Success = 0,
    /// The request failed.
    Failure = 1,
    /// The request was vetoed because a voice call is active.
    InCallFailure = 2,
    /// The hardware cannot serve the request (resource exhaustion); the
    /// consumer may choose not to retry offload.
    Unsupported = 3,
}

impl ControlAck {
    /// Raw control-channel code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Map a raw start status onto the control-channel code.
    pub const fn from_start_status(status: StreamStatus) -> Self {
        match status {
            StreamStatus::Success => ControlAck::Success,
            StreamStatus::NoResources => ControlAck::Unsupported,
            StreamStatus::Failed => ControlAck::Failure,
        }
    }
}
