//! Bounded FIFO handoff queue.

use std::fmt;

use crossbeam_channel::{bounded, Receiver, Sender};

/// A bounded multi-producer multi-consumer FIFO.
///
/// `put` blocks while the queue is full, `get` blocks while it is
/// empty. The queue emits no annotations: the handoff ordering a
/// detector should derive from a put/get pair is exactly what several
/// scenarios probe for, so the queue stays silent and lets the detector
/// model the channel itself.
pub struct BoundedQueue<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
}

impl<T> BoundedQueue<T> {
    /// Create a queue holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self { tx, rx }
    }

    /// Append `value`, blocking while the queue is full.
    pub fn put(&self, value: T) {
        self.tx
            .send(value)
            .expect("queue endpoints live as long as the queue");
    }

    /// Remove the oldest element, blocking while the queue is empty.
    pub fn get(&self) -> T {
        self.rx
            .recv()
            .expect("queue endpoints live as long as the queue")
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("len", &self.len())
            .field("capacity", &self.tx.capacity())
            .finish()
    }
}
