//! # Auralink Stream-Core: Stream-Session Event Coordination
//!
//! This crate is the reconciliation point of a two-party audio-streaming
//! session. Protocol events (idle, started, stopped, suspended) arrive
//! asynchronously from the signaling layer, hardware-offload completions
//! arrive from the offload command path, and the coordinator decides per
//! event which local data path applies (capture source vs. render sink),
//! which execution mode applies (software codec pump vs. hardware
//! offload), and what single acknowledgment the audio pipeline above is
//! owed on the control channel.
//!
//! The hard invariants:
//!
//! - **At most one acknowledgment per pending local request** — a request
//!   is acknowledged exactly once or stays pending; it is never
//!   double-acked and never silently dropped.
//! - **Role is resolved fresh on every event** — the negotiated role can
//!   only be trusted per session instance, so it is never cached here.
//! - **Hardware start commands are issued at most once per accepted
//!   start**, and never while a voice call is active.
//!
//! ## Usage
//!
//! All collaborators are injected as trait objects, so the coordinator
//! runs without a live session:
//!
//! ```rust
//! use std::sync::Arc;
//! use auralink_stream_core::{
//!     control_ack_channel, CallMonitor, CodecState, ControlAck, OffloadIssuer, PathDriver,
//!     PeerAddr, Role, SignalingSession, SourceDriver, StartSignal, StreamEventCoordinator,
//!     StreamOutcome, StreamStatus,
//! };
//!
//! struct Session;
//! impl SignalingSession for Session {
//!     fn role(&self) -> Role { Role::Source }
//!     fn offload_enabled(&self) -> bool { false }
//!     fn stream_started_ready(&self) -> bool { false }
//!     fn disconnect(&self, _peer: PeerAddr) {}
//! }
//!
//! struct Calls;
//! impl CallMonitor for Calls {
//!     fn call_active(&self) -> bool { false }
//! }
//!
//! struct Offload;
//! impl OffloadIssuer for Offload {
//!     fn issue_start(&self) {}
//!     fn start_completed(&self, _ack: ControlAck) {}
//!     fn stop_completed(&self, _status: StreamStatus) {}
//!     fn suspend_completed(&self, _status: StreamStatus) {}
//! }
//!
//! struct Driver;
//! impl PathDriver for Driver {
//!     fn on_idle(&self) {}
//!     fn on_stopped(&self, _outcome: Option<StreamOutcome>) {}
//!     fn on_suspended(&self, _outcome: Option<StreamOutcome>) {}
//!     fn debug_dump(&self, _w: &mut dyn std::fmt::Write) -> std::fmt::Result { Ok(()) }
//! }
//! impl SourceDriver for Driver {
//!     fn setup_codec(&self, _peer: PeerAddr) {}
//! }
//!
//! struct Codec;
//! impl CodecState for Codec {
//!     fn debug_dump(&self, _w: &mut dyn std::fmt::Write) -> std::fmt::Result { Ok(()) }
//! }
//!
//! let (acks, mut ack_rx) = control_ack_channel();
//! let coordinator = StreamEventCoordinator::builder()
//!     .session(Arc::new(Session))
//!     .calls(Arc::new(Calls))
//!     .offload(Arc::new(Offload))
//!     .source(Arc::new(Driver))
//!     .sink(Arc::new(Driver))
//!     .codec(Arc::new(Codec))
//!     .ack_channel(Arc::new(acks))
//!     .build()?;
//!
//! // A local start request in software mode is acknowledged immediately.
//! let acked = coordinator.on_started(PeerAddr::new([0; 6]), StartSignal::RequestOnly, true);
//! assert!(acked);
//! assert_eq!(ack_rx.try_recv().unwrap(), ControlAck::Success);
//! # Ok::<(), auralink_stream_core::StreamCoreError>(())
//! ```
//!
//! The production wiring funnels events through one ordered queue and
//! drives [`StreamEventCoordinator::run_event_loop`] on it; the entry
//! points are non-reentrant, run-to-completion handlers and must never be
//! called concurrently.

pub mod api;
pub mod control;
pub mod coordinator;
pub mod errors;
pub mod events;
pub mod types;

pub use api::{
    AckChannel, CallMonitor, CodecState, OffloadIssuer, PathDriver, SignalingSession, SourceDriver,
};
pub use control::{control_ack_channel, ControlAckSender};
pub use coordinator::{StreamEventCoordinator, StreamEventCoordinatorBuilder};
pub use errors::{Result, StreamCoreError};
pub use events::StreamEvent;
pub use types::{
    ControlAck, Initiator, PeerAddr, Role, StartOutcome, StartSignal, StreamOutcome, StreamStatus,
};
