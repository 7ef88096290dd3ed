//! Scenario threads with panic-propagating joins.

use std::thread::JoinHandle;

/// A spawned scenario thread.
///
/// `join` resumes the thread's panic on the joining thread, so an
/// assertion failure inside a worker fails the scenario instead of
/// disappearing into a dead `JoinHandle`.
#[derive(Debug)]
pub struct Thread {
    handle: JoinHandle<()>,
}

impl Thread {
    pub fn spawn(f: impl FnOnce() + Send + 'static) -> Self {
        Self {
            handle: std::thread::spawn(f),
        }
    }

    /// Wait for the thread to finish.
    pub fn join(self) {
        if let Err(panic) = self.handle.join() {
            std::panic::resume_unwind(panic);
        }
    }
}

/// A group of threads joined together, in spawn order.
#[derive(Debug, Default)]
pub struct ThreadSet {
    threads: Vec<Thread>,
}

impl ThreadSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, f: impl FnOnce() + Send + 'static) {
        self.threads.push(Thread::spawn(f));
    }

    /// Join every thread, in the order they were spawned.
    pub fn join_all(self) {
        for thread in self.threads {
            thread.join();
        }
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}
