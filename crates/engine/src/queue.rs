//! Unbounded multi-consumer work queue with a one-shot shutdown signal.
//!
//! Built on `crossbeam_channel`: the queue owns the only `Sender`, so taking
//! it out and dropping it is the shutdown signal. Receivers drain every item
//! still buffered before they observe the disconnect, which gives us both
//! "nothing pushed before shutdown is lost" and "`pop` never blocks after
//! shutdown once the queue is empty".

use crate::error::{EngineError, Result};
use crossbeam_channel::{Receiver, Sender};
use std::sync::{Mutex, PoisonError};

/// Outcome of [`WorkQueue::pop`].
#[derive(Debug, PartialEq, Eq)]
pub enum Pop<T> {
    Item(T),
    /// Shutdown was signalled and nothing is left to hand out.
    Done,
}

#[derive(Debug)]
pub struct WorkQueue<T> {
    sender: Mutex<Option<Sender<T>>>,
    receiver: Receiver<T>,
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WorkQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            sender: Mutex::new(Some(sender)),
            receiver,
        }
    }

    /// Enqueue without blocking.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::QueueClosed` if shutdown was already signalled;
    /// the item is dropped.
    pub fn push(&self, item: T) -> Result<()> {
        let guard = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(sender) => sender.send(item).map_err(|_| EngineError::QueueClosed),
            None => Err(EngineError::QueueClosed),
        }
    }

    /// Block until an item is available or the queue is shut down and empty.
    pub fn pop(&self) -> Pop<T> {
        match self.receiver.recv() {
            Ok(item) => Pop::Item(item),
            Err(_) => Pop::Done,
        }
    }

    /// Snapshot; may be stale by the time the caller looks at it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Wake every blocked `pop` once the remaining items are drained.
    /// Calling it again has no effect.
    pub fn signal_shutdown(&self) {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        drop(sender);
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}
