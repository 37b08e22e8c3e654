//! Event entry points for the stream coordinator

use super::StreamEventCoordinator;
use crate::types::{ControlAck, Initiator, PeerAddr, Role, StartSignal, StreamOutcome, StreamStatus};

impl StreamEventCoordinator {
    /// The session went idle.
    ///
    /// Resets whichever local path was active for the negotiated role.
    /// Idle is a teardown notification, not a request outcome, so no
    /// acknowledgment is ever produced here. No-op while the role is
    /// still unresolved.
    pub fn on_idle(&self) {
        let role = self.session.role();
        tracing::warn!(?role, "stream idle");
        match role {
            Role::Source => self.source.on_idle(),
            Role::Sink => self.sink.on_idle(),
            Role::Unknown => {}
        }
    }

    /// A start attempt resolved, or a pending local request needs to be
    /// acknowledged.
    ///
    /// Returns true when an ack was delivered or an ack-producing hardware
    /// command was issued for the pending local request. Local requests
    /// are always resolved one way or another so the requester never
    /// blocks forever on the control channel; remote-initiated starts
    /// never produce a local ack because nothing is pending locally.
    pub fn on_started(&self, peer: PeerAddr, signal: StartSignal, pending_start: bool) -> bool {
        tracing::warn!(%peer, pending_start, "stream started");

        let outcome = match signal {
            StartSignal::RequestOnly => {
                // Local request with no protocol confirmation yet.
                if !self.session.offload_enabled() {
                    self.acks.ack(ControlAck::Success);
                } else if !self.calls.call_active() {
                    self.offload.issue_start();
                } else {
                    tracing::error!("call in progress, not starting offload");
                    self.offload.start_completed(ControlAck::InCallFailure);
                }
                return true;
            }
            StartSignal::Confirmed(outcome) => outcome,
        };

        tracing::debug!(
            status = ?outcome.status,
            suspending = outcome.suspending,
            initiator = ?outcome.initiator,
            "start outcome"
        );

        if outcome.status.is_success() {
            if outcome.suspending {
                // Start and suspend raced; the terminal suspend event
                // settles this one.
                return false;
            }
            match outcome.initiator {
                Initiator::Local => {
                    if !pending_start {
                        return false;
                    }
                    if self.session.offload_enabled() {
                        // Ack deferred to on_offload_started.
                        self.offload.issue_start();
                    } else {
                        self.acks.ack(ControlAck::Success);
                    }
                    true
                }
                Initiator::Remote => {
                    // Remotely started: the codec must be configured
                    // before the data path runs.
                    self.source.setup_codec(peer);
                    if self.session.offload_enabled() {
                        self.offload.issue_start();
                    }
                    false
                }
            }
        } else if pending_start {
            tracing::warn!(status = ?outcome.status, "start request failed");
            self.acks.ack(ControlAck::Failure);
            true
        } else {
            false
        }
    }

    /// The stream stopped.
    pub fn on_stopped(&self, outcome: Option<StreamOutcome>) {
        tracing::warn!("stream stopped");

        if self.session.role() == Role::Sink {
            // The remote party drives a sink stop; execution mode and
            // local ack concerns do not apply.
            self.sink.on_stopped(outcome);
            return;
        }
        if !self.session.offload_enabled() {
            self.source.on_stopped(outcome);
        } else if let Some(outcome) = outcome {
            self.offload.stop_completed(outcome.status);
        }
    }

    /// The stream suspended.
    pub fn on_suspended(&self, outcome: Option<StreamOutcome>) {
        tracing::debug!("stream suspended");

        if !self.session.offload_enabled() {
            match self.session.role() {
                Role::Source => self.source.on_suspended(outcome),
                Role::Sink | Role::Unknown => self.sink.on_suspended(outcome),
            }
        } else {
            match outcome {
                Some(outcome) => self.offload.suspend_completed(outcome.status),
                // The signaling layer always carries a status on the
                // offload path; an absent one is a caller defect.
                None => tracing::error!("suspend without status in offload mode"),
            }
        }
    }

    /// The offload hardware reported the result of a start command.
    ///
    /// The raw status maps to `Success`, `Unsupported` (resource
    /// exhaustion), or `Failure`. In offload mode the hardware-start
    /// consumer is notified regardless of outcome; a rejection after the
    /// protocol layer already marked the stream started leaves no
    /// consistent half-started state, so the session is torn down.
    pub fn on_offload_started(&self, peer: PeerAddr, status: StreamStatus) {
        let ack = ControlAck::from_start_status(status);
        match ack {
            ControlAck::Success => tracing::debug!(%peer, "offload start succeeded"),
            _ => tracing::error!(%peer, ?status, ?ack, "offload start failed"),
        }

        if self.session.offload_enabled() {
            self.offload.start_completed(ack);
            if ack != ControlAck::Success && self.session.stream_started_ready() {
                tracing::error!(%peer, "offload rejected a started stream, disconnecting");
                self.session.disconnect(peer);
            }
        } else {
            self.acks.ack(ack);
        }
    }
}
