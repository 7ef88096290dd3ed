//! Synchronization primitives the race scenarios are written against.
//!
//! Every primitive here is a thin layer over `parking_lot` or
//! `crossbeam` that adds two things: condition-style acquisition
//! (`lock_when`, `await_when` and friends) and automatic emission of
//! ordering annotations on the paths where a handoff between threads is
//! implied by the primitive's own contract. Scenarios that synchronize
//! in ways the primitives cannot see emit their own edges through
//! [`caliper_core::annotate`].
//!
//! Identities: every [`Lock`], [`SharedLock`] and [`CondVar`] owns a
//! process-unique edge id drawn from
//! [`caliper_core::annotate::fresh_edge_id`], so annotations from
//! different primitives never collide.

pub mod condvar;
pub mod lock;
pub mod pool;
pub mod queue;
pub mod shared;
pub mod spin;
pub mod thread;

pub use condvar::CondVar;
pub use lock::{Lock, LockGuard};
pub use pool::WorkerPool;
pub use queue::BoundedQueue;
pub use shared::{SharedLock, SharedReadGuard, SharedWriteGuard};
pub use spin::{SpinGuard, SpinLock};
pub use thread::{Thread, ThreadSet};
