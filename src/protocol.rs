//! Message layer between workers and the coordinator.
//!
//! Three message kinds exist: a discovery notice, a final tally, and the
//! terminate signal. Each travels over a typed endpoint pair; receiving is
//! always a non-blocking poll, and the endpoint owns the re-arm bookkeeping
//! a raw request/flag scheme would push onto the caller. A disconnected
//! peer is fatal to whichever side notices — the protocol has no recovery
//! path for a lost participant.

use crate::classifier::Category;
use crate::table::FrequencyTable;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TryRecvError};

pub type WorkerId = usize;

/// A worker's first local observation of a category, sent once per category
/// per worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub worker: WorkerId,
    pub category: Category,
}

/// A worker's complete per-category counts, sent exactly once at shutdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub worker: WorkerId,
    pub counts: FrequencyTable,
}

/// One-shot stop signal, broadcast by the coordinator to every worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminate;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolError {
    #[error("peer disconnected while sending")]
    SendDisconnected,
    #[error("peer disconnected while polling")]
    RecvDisconnected,
}

/// Sending half of a link. Sends never block the caller's loop.
#[derive(Debug, Clone)]
pub struct Outbox<T>(Sender<T>);

impl<T> Outbox<T> {
    pub fn send(&self, message: T) -> Result<(), ProtocolError> {
        self.0.send(message).map_err(|_| ProtocolError::SendDisconnected)
    }
}

/// Receiving half of a link.
#[derive(Debug)]
pub struct Mailbox<T>(Receiver<T>);

impl<T> Mailbox<T> {
    /// Non-blocking poll: `Ok(None)` when no message is ready. Buffered
    /// messages are still delivered after the sender side is gone; only an
    /// empty, disconnected link is an error.
    pub fn poll(&self) -> Result<Option<T>, ProtocolError> {
        match self.0.try_recv() {
            Ok(message) => Ok(Some(message)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ProtocolError::RecvDisconnected),
        }
    }
}

/// An unbounded link for the worker-to-coordinator streams.
pub fn link<T>() -> (Outbox<T>, Mailbox<T>) {
    let (tx, rx) = unbounded();
    (Outbox(tx), Mailbox(rx))
}

/// A bounded link; capacity 1 suits the one-shot terminate signal.
pub fn link_bounded<T>(capacity: usize) -> (Outbox<T>, Mailbox<T>) {
    let (tx, rx) = bounded(capacity);
    (Outbox(tx), Mailbox(rx))
}
