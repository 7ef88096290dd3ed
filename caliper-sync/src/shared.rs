//! Reader-writer lock with predicate acquisition on the read side.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use caliper_core::annotate;
use parking_lot::{Condvar, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A reader-writer lock that owns its payload.
///
/// `read_when` blocks until a predicate over the payload holds and then
/// returns a read guard. Only writers can flip a predicate, so waiters
/// are woken when a write guard is released.
///
/// Annotation contract matches [`crate::Lock`]: successful predicate
/// acquisitions emit the after half of this lock's edge, and a write
/// release with registered waiters emits the before half. Plain reads
/// and writes emit nothing.
pub struct SharedLock<T> {
    edge_id: u64,
    state: RwLock<T>,
    // Predicate waiters park on `changed` under `waiters`. A waiter
    // registers itself before it gives up its read guard, and a write
    // release takes `waiters` before the rwlock is freed, so a wakeup
    // cannot slip into the gap between re-check and park.
    waiters: Mutex<usize>,
    changed: Condvar,
}

impl<T> SharedLock<T> {
    pub fn new(value: T) -> Self {
        Self {
            edge_id: annotate::fresh_edge_id(),
            state: RwLock::new(value),
            waiters: Mutex::new(0),
            changed: Condvar::new(),
        }
    }

    /// The ordering edge id annotations about this lock are keyed by.
    pub fn edge_id(&self) -> u64 {
        self.edge_id
    }

    /// Acquire exclusive access, blocking out readers and writers.
    pub fn write(&self) -> SharedWriteGuard<'_, T> {
        SharedWriteGuard {
            lock: self,
            inner: self.state.write(),
        }
    }

    /// Acquire exclusive access only if no guard is out right now.
    pub fn try_write(&self) -> Option<SharedWriteGuard<'_, T>> {
        self.state
            .try_write()
            .map(|inner| SharedWriteGuard { lock: self, inner })
    }

    /// Acquire shared access, blocking while a writer is in.
    pub fn read(&self) -> SharedReadGuard<'_, T> {
        SharedReadGuard {
            inner: self.state.read(),
        }
    }

    /// Acquire shared access only if no writer is in right now.
    pub fn try_read(&self) -> Option<SharedReadGuard<'_, T>> {
        self.state
            .try_read()
            .map(|inner| SharedReadGuard { inner })
    }

    /// Acquire shared access once `pred` holds for the payload.
    pub fn read_when(&self, pred: impl Fn(&T) -> bool) -> SharedReadGuard<'_, T> {
        loop {
            let inner = self.state.read();
            if pred(&inner) {
                annotate::happens_after(self.edge_id);
                return SharedReadGuard { inner };
            }
            let mut count = self.waiters.lock();
            drop(inner);
            *count += 1;
            self.changed.wait(&mut count);
            *count -= 1;
            // Release before retrying the read lock; a write release
            // holds the rwlock while taking `waiters`.
            drop(count);
        }
    }

    /// Like [`SharedLock::read_when`], giving up `timeout` after the
    /// first attempt. On expiry the lock is left free and `None` is
    /// returned.
    pub fn read_when_timeout(
        &self,
        pred: impl Fn(&T) -> bool,
        timeout: Duration,
    ) -> Option<SharedReadGuard<'_, T>> {
        let deadline = Instant::now() + timeout;
        loop {
            let inner = self.state.read();
            if pred(&inner) {
                annotate::happens_after(self.edge_id);
                return Some(SharedReadGuard { inner });
            }
            let mut count = self.waiters.lock();
            drop(inner);
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            *count += 1;
            self.changed.wait_for(&mut count, deadline - now);
            *count -= 1;
            drop(count);
        }
    }
}

impl<T: Default> Default for SharedLock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> fmt::Debug for SharedLock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLock")
            .field("edge_id", &self.edge_id)
            .finish_non_exhaustive()
    }
}

/// Exclusive access to a [`SharedLock`]'s payload.
pub struct SharedWriteGuard<'a, T> {
    lock: &'a SharedLock<T>,
    inner: RwLockWriteGuard<'a, T>,
}

impl<T> Deref for SharedWriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for SharedWriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> Drop for SharedWriteGuard<'_, T> {
    fn drop(&mut self) {
        // Runs while the write lock is still held; `inner` releases it
        // afterwards.
        let count = self.lock.waiters.lock();
        if *count > 0 {
            annotate::happens_before(self.lock.edge_id);
            self.lock.changed.notify_all();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedWriteGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriteGuard")
            .field("value", &&*self.inner)
            .finish()
    }
}

/// Shared access to a [`SharedLock`]'s payload. Releasing a read guard
/// cannot flip a predicate, so dropping one emits nothing.
pub struct SharedReadGuard<'a, T> {
    inner: RwLockReadGuard<'a, T>,
}

impl<T> Deref for SharedReadGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedReadGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedReadGuard")
            .field("value", &&*self.inner)
            .finish()
    }
}
