//! Stream-session event coordinator
//!
//! The coordinator reconciles three independent sources of truth for one
//! two-party streaming session: the signaling layer's protocol outcomes,
//! locally pending operator requests, and the active execution mode
//! (software codec pump vs. hardware offload). Per event it invokes at
//! most one local-path callback, issues at most one hardware command, and
//! delivers at most one acknowledgment on the control channel.

mod handlers;

use std::fmt;
use std::sync::Arc;

use crate::api::{
    AckChannel, CallMonitor, CodecState, OffloadIssuer, PathDriver, SignalingSession, SourceDriver,
};
use crate::errors::{Result, StreamCoreError};

/// Coordinates stream-session events for one local endpoint.
///
/// Entry points are non-reentrant, run-to-completion handlers. Callers
/// must funnel signaling events and offload completions through a single
/// ordered queue (see [`run_event_loop`](Self::run_event_loop)); the
/// one-ack-per-request invariant relies on that serialization, not on
/// locking inside the coordinator.
pub struct StreamEventCoordinator {
    pub(crate) session: Arc<dyn SignalingSession>,
    pub(crate) calls: Arc<dyn CallMonitor>,
    pub(crate) offload: Arc<dyn OffloadIssuer>,
    pub(crate) source: Arc<dyn SourceDriver>,
    pub(crate) sink: Arc<dyn PathDriver>,
    pub(crate) codec: Arc<dyn CodecState>,
    pub(crate) acks: Arc<dyn AckChannel>,
}

impl StreamEventCoordinator {
    /// Start wiring a coordinator.
    pub fn builder() -> StreamEventCoordinatorBuilder {
        StreamEventCoordinatorBuilder::default()
    }

    /// Diagnostic dump of source, sink, and codec-negotiation state.
    ///
    /// Best-effort: a failing sub-dump is noted in the log and the
    /// remaining dumps still run.
    pub fn debug_dump(&self, w: &mut dyn fmt::Write) {
        if self.source.debug_dump(w).is_err() {
            tracing::debug!("source debug dump failed");
        }
        if self.sink.debug_dump(w).is_err() {
            tracing::debug!("sink debug dump failed");
        }
        if self.codec.debug_dump(w).is_err() {
            tracing::debug!("codec debug dump failed");
        }
    }
}

/// Builder wiring the coordinator's collaborators.
#[derive(Default)]
pub struct StreamEventCoordinatorBuilder {
    session: Option<Arc<dyn SignalingSession>>,
    calls: Option<Arc<dyn CallMonitor>>,
    offload: Option<Arc<dyn OffloadIssuer>>,
    source: Option<Arc<dyn SourceDriver>>,
    sink: Option<Arc<dyn PathDriver>>,
    codec: Option<Arc<dyn CodecState>>,
    acks: Option<Arc<dyn AckChannel>>,
}

impl StreamEventCoordinatorBuilder {
    /// Session state reader owned by the signaling layer.
    pub fn session(mut self, session: Arc<dyn SignalingSession>) -> Self {
        self.session = Some(session);
        self
    }

    /// Voice-call state guard.
    pub fn calls(mut self, calls: Arc<dyn CallMonitor>) -> Self {
        self.calls = Some(calls);
        self
    }

    /// Hardware-offload command issuer.
    pub fn offload(mut self, offload: Arc<dyn OffloadIssuer>) -> Self {
        self.offload = Some(offload);
        self
    }

    /// Capture-side path driver.
    pub fn source(mut self, source: Arc<dyn SourceDriver>) -> Self {
        self.source = Some(source);
        self
    }

    /// Render-side path driver.
    pub fn sink(mut self, sink: Arc<dyn PathDriver>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Codec-negotiation state, for diagnostics.
    pub fn codec(mut self, codec: Arc<dyn CodecState>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Control channel for request acknowledgments.
    pub fn ack_channel(mut self, acks: Arc<dyn AckChannel>) -> Self {
        self.acks = Some(acks);
        self
    }

    /// Build the coordinator, failing if any collaborator is unwired.
    pub fn build(self) -> Result<StreamEventCoordinator> {
        Ok(StreamEventCoordinator {
            session: self
                .session
                .ok_or(StreamCoreError::MissingCollaborator { name: "session" })?,
            calls: self
                .calls
                .ok_or(StreamCoreError::MissingCollaborator { name: "calls" })?,
            offload: self
                .offload
                .ok_or(StreamCoreError::MissingCollaborator { name: "offload" })?,
            source: self
                .source
                .ok_or(StreamCoreError::MissingCollaborator { name: "source" })?,
            sink: self
                .sink
                .ok_or(StreamCoreError::MissingCollaborator { name: "sink" })?,
            codec: self
                .codec
                .ok_or(StreamCoreError::MissingCollaborator { name: "codec" })?,
            acks: self
                .acks
                .ok_or(StreamCoreError::MissingCollaborator { name: "ack_channel" })?,
        })
    }
}
