//! Condition variable over [`Lock`] guards.

use std::fmt;
use std::time::Duration;

use caliper_core::annotate;
use parking_lot::Condvar;

use crate::lock::LockGuard;

/// A condition variable used together with a [`crate::Lock`].
///
/// Unlike the predicate methods on [`crate::Lock`], waiting and
/// signalling here emit no annotations at all. A scenario whose ordering
/// argument rests on a `CondVar` handoff must pair
/// `annotate::happens_before` / `happens_after` against
/// [`CondVar::edge_id`] itself, or accept that the handoff is invisible.
pub struct CondVar {
    edge_id: u64,
    inner: Condvar,
}

impl CondVar {
    pub fn new() -> Self {
        Self {
            edge_id: annotate::fresh_edge_id(),
            inner: Condvar::new(),
        }
    }

    /// Edge id for scenarios that annotate this condvar's handoffs.
    pub fn edge_id(&self) -> u64 {
        self.edge_id
    }

    /// Atomically release the guard's lock and wait for a signal. The
    /// lock is re-held when this returns. Wakeups can be spurious;
    /// callers loop on their condition.
    pub fn wait<T>(&self, guard: &mut LockGuard<'_, T>) {
        self.inner.wait(&mut guard.inner);
    }

    /// Like [`CondVar::wait`] with a timeout. Returns `false` if the
    /// wait timed out. The lock is re-held when this returns.
    pub fn wait_timeout<T>(&self, guard: &mut LockGuard<'_, T>, timeout: Duration) -> bool {
        !self.inner.wait_for(&mut guard.inner, timeout).timed_out()
    }

    /// Wake one waiter, if any.
    pub fn signal(&self) {
        self.inner.notify_one();
    }

    /// Wake every waiter.
    pub fn broadcast(&self) {
        self.inner.notify_all();
    }
}

impl Default for CondVar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CondVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CondVar")
            .field("edge_id", &self.edge_id)
            .finish_non_exhaustive()
    }
}
