//! Error handling for the stream coordination core
//!
//! Event handling itself is infallible from the coordinator's point of
//! view: acknowledgment and hardware-command sends are fire-and-forget,
//! and a failed send is logged by the channel, not returned. The errors
//! here cover the fallible surfaces around the coordinator: wiring it up
//! and explicit, checked ack delivery.

use thiserror::Error;

/// Result type alias for stream-core operations
pub type Result<T> = std::result::Result<T, StreamCoreError>;

/// Errors produced by the stream coordination core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamCoreError {
    /// A required collaborator was not wired before `build()`
    #[error("missing collaborator: {name}")]
    MissingCollaborator {
        /// Builder slot that was left empty
        name: &'static str,
    },

    /// The control-channel receiver has gone away
    #[error("control ack channel closed")]
    AckChannelClosed,
}
