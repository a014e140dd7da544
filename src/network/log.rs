//! Wire logging
//!
//! The connection reports traffic to an injected [`WireLog`] instead of
//! printing behind a global debug switch.

use crate::protocol::Status;

/// Receives wire traffic events from a connection
pub trait WireLog: Send {
    /// A command line is about to be written (without the trailing newline)
    fn command(&self, _line: &str) {}

    /// A complete response was read
    fn response(&self, _body: &str, _status: &Status) {}
}

/// Emits `tracing` events tagged with the peer label
#[derive(Debug, Clone)]
pub struct TracingLog {
    peer: String,
}

impl TracingLog {
    pub fn new(peer: impl Into<String>) -> Self {
        Self { peer: peer.into() }
    }
}

impl WireLog for TracingLog {
    fn command(&self, line: &str) {
        tracing::trace!(peer = %self.peer, "SEND: {}", line);
    }

    fn response(&self, body: &str, status: &Status) {
        tracing::trace!(peer = %self.peer, "RECV: {} ({})", body, status);

        if !status.is_success() {
            tracing::debug!(
                peer = %self.peer,
                "Server returned error {}: {}",
                status.id,
                status.message
            );
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLog;

impl WireLog for NoopLog {}
