//! Snapshot publishing/subscription abstraction (mechanics only).
//!
//! Every subscriber gets its own copy of each published message (broadcast).
//! Messages are delivered in publish order; the store is the only publisher.
//! Nothing is retained for late subscribers: a subscriber that needs the
//! current state reads the store's snapshot once and then follows the stream.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::time::Duration;

/// A subscription to a stream of published messages.
///
/// ```ignore
/// let sub = store.subscribe();
/// store.set_current_page(2);
/// let changed = sub.try_recv()?;
/// render(&changed.snapshot);
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently queued, keeping only the newest message.
    ///
    /// Renderers only care about the latest snapshot.
    pub fn latest(&self) -> Option<M> {
        self.receiver.try_iter().last()
    }

    /// Drain everything currently queued, in publish order.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Pub/sub channel for state snapshots.
pub trait SnapshotBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> SnapshotBus<M> for Arc<B>
where
    B: SnapshotBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
