//! The ordered, tagged scenario table.

use bitflags::bitflags;

bitflags! {
    /// Classification tags controlling how a scenario is scheduled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScenarioTags: u32 {
        /// Probes one detector feature; part of the ordinary suite.
        const FEATURE = 1 << 0;
        /// Long-running robustness exercise.
        const STABILITY = 1 << 1;
        /// Load generator for timing the detector, not for verdicts.
        const PERFORMANCE = 1 << 2;
        /// Skipped by the default batch; runs only when addressed
        /// directly.
        const EXCLUDE_FROM_DEFAULT_BATCH = 1 << 3;
    }
}

/// Ground truth for a scenario, phrased as the verdict an ideal
/// detector run would be scored with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No race exists and none should be reported.
    TrueNegative,
    /// A real race exists and is declared via `expect_race`.
    TruePositive,
    /// A real race exists but typical detectors miss it; nothing is
    /// declared.
    FalseNegative,
    /// No race exists, yet lockset-style detectors are expected to
    /// report one; the anticipated report is declared via
    /// `expect_race`.
    FalsePositive,
}

/// One entry of the scenario table.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioDescriptor {
    pub name: &'static str,
    pub entry: fn(),
    pub tags: ScenarioTags,
    pub verdict: Verdict,
}

/// An ordered scenario table. Position is identity: external tooling
/// addresses scenarios by index, and index 0 is reserved so that the
/// first addressable scenario is 1.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ScenarioDescriptor>,
}

fn entry(
    name: &'static str,
    entry: fn(),
    tags: ScenarioTags,
    verdict: Verdict,
) -> ScenarioDescriptor {
    ScenarioDescriptor {
        name,
        entry,
        tags,
        verdict,
    }
}

impl Registry {
    pub fn new(entries: Vec<ScenarioDescriptor>) -> Self {
        Self { entries }
    }

    /// The standard suite, in its fixed order.
    pub fn standard() -> Self {
        use Verdict::{FalseNegative, FalsePositive, TrueNegative, TruePositive};

        let feature = ScenarioTags::FEATURE;
        let excluded_stability = ScenarioTags::STABILITY | ScenarioTags::EXCLUDE_FROM_DEFAULT_BATCH;
        let excluded_performance =
            ScenarioTags::PERFORMANCE | ScenarioTags::EXCLUDE_FROM_DEFAULT_BATCH;

        Self::new(vec![
            entry("reserved_slot", crate::reserved_slot::run, feature, TrueNegative),
            entry("write_after_submit", crate::write_after_submit::run, feature, TruePositive),
            entry("condvar_handshake", crate::condvar_handshake::run, feature, TrueNegative),
            entry("lock_when_handshake", crate::lock_when_handshake::run, feature, TrueNegative),
            entry("queue_handoff", crate::queue_handoff::run, feature, TrueNegative),
            entry("condvar_missed_wait", crate::condvar_missed_wait::run, feature, FalsePositive),
            entry("condvar_annotated_wait", crate::condvar_annotated_wait::run, feature, TrueNegative),
            entry("lock_when_presignalled", crate::lock_when_presignalled::run, feature, TrueNegative),
            entry("start_join_ordering", crate::start_join_ordering::run, feature, TrueNegative),
            entry("delayed_write_race", crate::delayed_write_race::run, feature, TruePositive),
            entry("delay_masked_race", crate::delay_masked_race::run, feature, FalseNegative),
            entry("condvar_two_workers", crate::condvar_two_workers::run, feature, FalsePositive),
            entry("lock_then_queue", crate::lock_then_queue::run, feature, FalsePositive),
            entry("lock_then_lock_when", crate::lock_then_lock_when::run, feature, FalsePositive),
            entry("two_queue_semaphores", crate::two_queue_semaphores::run, feature, FalsePositive),
            entry("lock_when_two_waiters", crate::lock_when_two_waiters::run, feature, TrueNegative),
            entry("await_barrier_two", crate::await_barrier_two::run, feature, FalsePositive),
            entry("await_barrier_three", crate::await_barrier_three::run, feature, FalsePositive),
            entry("await_handshake", crate::await_handshake::run, feature, TrueNegative),
            entry("await_timeout_success", crate::await_timeout_success::run, feature, TrueNegative),
            entry("await_timeout_expires", crate::await_timeout_expires::run, feature, TruePositive),
            entry("lock_when_timeout_expires", crate::lock_when_timeout_expires::run, feature, TruePositive),
            entry("condvar_wait_deadline", crate::condvar_wait_deadline::run, feature, TruePositive),
            entry("try_and_shared_locks", crate::try_and_shared_locks::run, feature, TrueNegative),
            entry("read_when_handshake", crate::read_when_handshake::run, feature, TrueNegative),
            entry("read_when_timeout_success", crate::read_when_timeout_success::run, feature, TrueNegative),
            entry("read_when_timeout_expires", crate::read_when_timeout_expires::run, feature, TruePositive),
            entry("spinlock_counter", crate::spinlock_counter::run, feature, TrueNegative),
            entry("queue_then_lock_reread", crate::queue_then_lock_reread::run, feature, FalsePositive),
            entry("two_queues_two_getters", crate::two_queues_two_getters::run, feature, FalsePositive),
            entry("published_boundary_readers", crate::published_boundary_readers::run, feature, TrueNegative),
            entry("published_boundary_writers", crate::published_boundary_writers::run, feature, TrueNegative),
            entry("join_out_of_order", crate::join_out_of_order::run, feature, FalsePositive),
            entry("thread_set_stress", crate::thread_set_stress::run, excluded_stability, TrueNegative),
            entry("lock_set_stress", crate::lock_set_stress::run, excluded_stability, TrueNegative),
            entry("lock_churn_perf", crate::lock_churn_perf::run, excluded_performance, TrueNegative),
            entry("queue_then_two_locks", crate::queue_then_two_locks::run, feature, FalsePositive),
            entry("locked_write_delayed_read", crate::locked_write_delayed_read::run, feature, TrueNegative),
            entry("two_queue_fanout", crate::two_queue_fanout::run, feature, FalsePositive),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScenarioDescriptor> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioDescriptor> {
        self.entries.iter()
    }
}
