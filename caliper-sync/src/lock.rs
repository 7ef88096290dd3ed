//! Mutual exclusion with condition-style acquisition.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use caliper_core::annotate;
use parking_lot::{Condvar, Mutex, MutexGuard};

/// A mutex that owns its payload and supports predicate acquisition.
///
/// `lock` and `try_lock` behave like any mutex. `lock_when` blocks until
/// a predicate over the payload holds, and a held guard can re-wait with
/// [`LockGuard::await_when`]. Predicates are re-evaluated whenever some
/// guard is released, so any mutation that can flip a predicate is
/// picked up without an explicit signal.
///
/// Annotation contract: a successful predicate acquisition emits the
/// after half of this lock's ordering edge. A release that happens while
/// predicate waiters are registered emits the before half and wakes
/// them. A release with no registered waiters emits nothing; scenarios
/// that need an edge across such a release emit it themselves against
/// [`Lock::edge_id`].
pub struct Lock<T> {
    edge_id: u64,
    // Mutated only while `state` is held, so Relaxed is enough.
    waiters: AtomicUsize,
    state: Mutex<T>,
    changed: Condvar,
}

impl<T> Lock<T> {
    pub fn new(value: T) -> Self {
        Self {
            edge_id: annotate::fresh_edge_id(),
            waiters: AtomicUsize::new(0),
            state: Mutex::new(value),
            changed: Condvar::new(),
        }
    }

    /// The ordering edge id annotations about this lock are keyed by.
    pub fn edge_id(&self) -> u64 {
        self.edge_id
    }

    /// Acquire the lock, blocking until it is available.
    pub fn lock(&self) -> LockGuard<'_, T> {
        LockGuard {
            lock: self,
            inner: self.state.lock(),
        }
    }

    /// Acquire the lock only if it is free right now.
    pub fn try_lock(&self) -> Option<LockGuard<'_, T>> {
        self.state
            .try_lock()
            .map(|inner| LockGuard { lock: self, inner })
    }

    /// Acquire the lock once `pred` holds for the payload.
    pub fn lock_when(&self, pred: impl Fn(&T) -> bool) -> LockGuard<'_, T> {
        let mut inner = self.state.lock();
        self.waiters.fetch_add(1, Ordering::Relaxed);
        while !pred(&inner) {
            self.changed.wait(&mut inner);
        }
        self.waiters.fetch_sub(1, Ordering::Relaxed);
        annotate::happens_after(self.edge_id);
        LockGuard { lock: self, inner }
    }

    /// Like [`Lock::lock_when`], giving up `timeout` after the first
    /// acquisition attempt. On expiry the lock is released and `None` is
    /// returned.
    pub fn lock_when_timeout(
        &self,
        pred: impl Fn(&T) -> bool,
        timeout: Duration,
    ) -> Option<LockGuard<'_, T>> {
        let deadline = Instant::now() + timeout;
        let mut inner = self.state.lock();
        self.waiters.fetch_add(1, Ordering::Relaxed);
        while !pred(&inner) {
            let now = Instant::now();
            if now >= deadline {
                self.waiters.fetch_sub(1, Ordering::Relaxed);
                drop(LockGuard { lock: self, inner });
                return None;
            }
            self.changed.wait_for(&mut inner, deadline - now);
        }
        self.waiters.fetch_sub(1, Ordering::Relaxed);
        annotate::happens_after(self.edge_id);
        Some(LockGuard { lock: self, inner })
    }
}

impl<T: Default> Default for Lock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> fmt::Debug for Lock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lock")
            .field("edge_id", &self.edge_id)
            .field("waiters", &self.waiters.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Exclusive access to a [`Lock`]'s payload.
///
/// Dropping the guard releases the lock. If predicate waiters are
/// registered at that point, the release emits the lock's before edge
/// and wakes all of them so they can re-evaluate.
pub struct LockGuard<'a, T> {
    lock: &'a Lock<T>,
    pub(crate) inner: MutexGuard<'a, T>,
}

impl<T> LockGuard<'_, T> {
    /// Keep the lock held and block until `pred` holds for the payload.
    pub fn await_when(&mut self, pred: impl Fn(&T) -> bool) {
        self.lock.waiters.fetch_add(1, Ordering::Relaxed);
        while !pred(&self.inner) {
            self.lock.changed.wait(&mut self.inner);
        }
        self.lock.waiters.fetch_sub(1, Ordering::Relaxed);
        annotate::happens_after(self.lock.edge_id);
    }

    /// Like [`LockGuard::await_when`] with a timeout. Returns whether the
    /// predicate held; the lock stays held either way.
    pub fn await_when_timeout(&mut self, pred: impl Fn(&T) -> bool, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.lock.waiters.fetch_add(1, Ordering::Relaxed);
        while !pred(&self.inner) {
            let now = Instant::now();
            if now >= deadline {
                self.lock.waiters.fetch_sub(1, Ordering::Relaxed);
                return false;
            }
            self.lock.changed.wait_for(&mut self.inner, deadline - now);
        }
        self.lock.waiters.fetch_sub(1, Ordering::Relaxed);
        annotate::happens_after(self.lock.edge_id);
        true
    }
}

impl<T> Deref for LockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for LockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> Drop for LockGuard<'_, T> {
    fn drop(&mut self) {
        // Runs while the mutex is still held; `inner` unlocks afterwards.
        if self.lock.waiters.load(Ordering::Relaxed) > 0 {
            annotate::happens_before(self.lock.edge_id);
            self.lock.changed.notify_all();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LockGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockGuard")
            .field("edge_id", &self.lock.edge_id)
            .field("value", &&*self.inner)
            .finish()
    }
}
