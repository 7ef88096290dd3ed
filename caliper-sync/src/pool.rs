//! Fixed-size worker pool with join-on-drop.

use std::thread::{Builder, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::debug;

type Task = Box<dyn FnOnce() + Send + 'static>;

/// A fixed set of worker threads consuming a shared task feed.
///
/// Tasks can be submitted before or after [`WorkerPool::start`];
/// submissions before the start are queued. Dropping the pool closes
/// the feed, lets the workers drain everything already submitted and
/// joins them, so by the time `drop` returns every submitted task has
/// run. A worker that panicked has its panic resumed on the dropping
/// thread. Dropping a pool that was never started discards queued
/// tasks unexecuted.
pub struct WorkerPool {
    size: usize,
    tx: Option<Sender<Task>>,
    rx: Receiver<Task>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Create a pool that will run `size` worker threads.
    pub fn new(size: usize) -> Self {
        let (tx, rx) = unbounded();
        Self {
            size,
            tx: Some(tx),
            rx,
            workers: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Spawn the worker threads. Must be called at most once.
    pub fn start(&mut self) {
        assert!(self.workers.is_empty(), "worker pool already started");
        for n in 0..self.size {
            let rx = self.rx.clone();
            let handle = Builder::new()
                .name(format!("pool-worker-{n}"))
                .spawn(move || {
                    while let Ok(task) = rx.recv() {
                        task();
                    }
                })
                .expect("spawning pool worker");
            self.workers.push(handle);
        }
        debug!(size = self.size, "worker pool started");
    }

    /// Queue `task` for execution on some worker.
    pub fn submit(&self, task: impl FnOnce() + Send + 'static) {
        self.tx
            .as_ref()
            .expect("worker pool feed already closed")
            .send(Box::new(task))
            .expect("pool workers live as long as the feed");
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Closing the feed ends the worker loops once the queue is
        // drained.
        drop(self.tx.take());
        for handle in self.workers.drain(..) {
            if let Err(panic) = handle.join() {
                std::panic::resume_unwind(panic);
            }
        }
        debug!(size = self.size, "worker pool drained");
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("size", &self.size)
            .field("started", &!self.workers.is_empty())
            .field("queued", &self.rx.len())
            .finish()
    }
}
