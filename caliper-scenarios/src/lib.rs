//! The scenario library: small concurrent programs whose correct
//! detector verdict is known in advance.
//!
//! Each module holds one scenario as a `run()` entry point plus the
//! worker functions and shared context it needs. Scenarios build their
//! state fresh on every run, so they can be executed repeatedly and in
//! any order. The [`registry`] module ties them into the ordered,
//! tagged table the harness executes from.
//!
//! Four families, by expected detector behaviour:
//!
//! - true negatives: correctly synchronized, a clean detector stays
//!   silent;
//! - true positives: really racy, declared via `expect_race`;
//! - false positives: correctly synchronized in ways lockset-style
//!   detectors typically cannot see, declared via `expect_race` because
//!   a report is anticipated;
//! - false negatives: really racy but hidden from typical detectors,
//!   deliberately not declared.

pub mod registry;

pub mod reserved_slot;
pub mod write_after_submit;
pub mod condvar_handshake;
pub mod lock_when_handshake;
pub mod queue_handoff;
pub mod condvar_missed_wait;
pub mod condvar_annotated_wait;
pub mod lock_when_presignalled;
pub mod start_join_ordering;
pub mod delayed_write_race;
pub mod delay_masked_race;
pub mod condvar_two_workers;
pub mod lock_then_queue;
pub mod lock_then_lock_when;
pub mod two_queue_semaphores;
pub mod lock_when_two_waiters;
pub mod await_barrier_two;
pub mod await_barrier_three;
pub mod await_handshake;
pub mod await_timeout_success;
pub mod await_timeout_expires;
pub mod lock_when_timeout_expires;
pub mod condvar_wait_deadline;
pub mod try_and_shared_locks;
pub mod read_when_handshake;
pub mod read_when_timeout_success;
pub mod read_when_timeout_expires;
pub mod spinlock_counter;
pub mod queue_then_lock_reread;
pub mod two_queues_two_getters;
pub mod published_boundary_readers;
pub mod published_boundary_writers;
pub mod join_out_of_order;
pub mod thread_set_stress;
pub mod lock_set_stress;
pub mod lock_churn_perf;
pub mod queue_then_two_locks;
pub mod locked_write_delayed_read;
pub mod two_queue_fanout;

pub use registry::{Registry, ScenarioDescriptor, ScenarioTags, Verdict};
