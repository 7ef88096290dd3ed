use std::sync::atomic::{AtomicUsize, Ordering};

use caliper_harness::{HarnessError, Runner, Selection};
use caliper_scenarios::{Registry, ScenarioDescriptor, ScenarioTags, Verdict};

fn descriptor(name: &'static str, entry: fn(), tags: ScenarioTags) -> ScenarioDescriptor {
    ScenarioDescriptor {
        name,
        entry,
        tags,
        verdict: Verdict::TrueNegative,
    }
}

#[test]
fn selection_maps_zero_to_the_batch() {
    assert_eq!(Selection::from_index(0), Selection::DefaultBatch);
    assert_eq!(Selection::from_index(7), Selection::Single(7));
}

static SINGLE_HITS: [AtomicUsize; 3] = [
    AtomicUsize::new(0),
    AtomicUsize::new(0),
    AtomicUsize::new(0),
];

#[test]
fn single_selection_runs_exactly_that_scenario() {
    fn slot0() {
        SINGLE_HITS[0].fetch_add(1, Ordering::Relaxed);
    }
    fn slot1() {
        SINGLE_HITS[1].fetch_add(1, Ordering::Relaxed);
    }
    fn slot2() {
        SINGLE_HITS[2].fetch_add(1, Ordering::Relaxed);
    }

    let runner = Runner::new(Registry::new(vec![
        descriptor("zero", slot0, ScenarioTags::FEATURE),
        descriptor("one", slot1, ScenarioTags::FEATURE),
        descriptor("two", slot2, ScenarioTags::FEATURE),
    ]));
    let summary = runner.run(Selection::Single(2)).unwrap();

    assert_eq!(summary.indices(), vec![2]);
    assert_eq!(summary.executed[0].name, "two");
    assert_eq!(SINGLE_HITS[0].load(Ordering::Relaxed), 0);
    assert_eq!(SINGLE_HITS[1].load(Ordering::Relaxed), 0);
    assert_eq!(SINGLE_HITS[2].load(Ordering::Relaxed), 1);
}

static EXCLUDED_HITS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn single_selection_reaches_excluded_entries() {
    fn slot0() {}
    fn slot1() {
        EXCLUDED_HITS.fetch_add(1, Ordering::Relaxed);
    }

    let runner = Runner::new(Registry::new(vec![
        descriptor("zero", slot0, ScenarioTags::FEATURE),
        descriptor(
            "one",
            slot1,
            ScenarioTags::STABILITY | ScenarioTags::EXCLUDE_FROM_DEFAULT_BATCH,
        ),
    ]));
    let summary = runner.run(Selection::Single(1)).unwrap();

    assert_eq!(summary.indices(), vec![1]);
    assert_eq!(EXCLUDED_HITS.load(Ordering::Relaxed), 1);
}

static BATCH_HITS: [AtomicUsize; 4] = [
    AtomicUsize::new(0),
    AtomicUsize::new(0),
    AtomicUsize::new(0),
    AtomicUsize::new(0),
];

#[test]
fn batch_skips_slot_zero_and_excluded_entries() {
    fn slot0() {
        BATCH_HITS[0].fetch_add(1, Ordering::Relaxed);
    }
    fn slot1() {
        BATCH_HITS[1].fetch_add(1, Ordering::Relaxed);
    }
    fn slot2() {
        BATCH_HITS[2].fetch_add(1, Ordering::Relaxed);
    }
    fn slot3() {
        BATCH_HITS[3].fetch_add(1, Ordering::Relaxed);
    }

    let runner = Runner::new(Registry::new(vec![
        descriptor("zero", slot0, ScenarioTags::FEATURE),
        descriptor("one", slot1, ScenarioTags::FEATURE),
        descriptor("two", slot2, ScenarioTags::FEATURE),
        descriptor(
            "three",
            slot3,
            ScenarioTags::STABILITY | ScenarioTags::EXCLUDE_FROM_DEFAULT_BATCH,
        ),
    ]));
    let summary = runner.run(Selection::DefaultBatch).unwrap();

    assert_eq!(summary.indices(), vec![1, 2]);
    assert_eq!(BATCH_HITS[0].load(Ordering::Relaxed), 0);
    assert_eq!(BATCH_HITS[1].load(Ordering::Relaxed), 1);
    assert_eq!(BATCH_HITS[2].load(Ordering::Relaxed), 1);
    assert_eq!(BATCH_HITS[3].load(Ordering::Relaxed), 0);
}

#[test]
fn out_of_range_selection_fails_before_anything_runs() {
    fn unreachable_entry() {
        panic!("must not execute");
    }

    let runner = Runner::new(Registry::new(vec![
        descriptor("zero", unreachable_entry, ScenarioTags::FEATURE),
        descriptor("one", unreachable_entry, ScenarioTags::FEATURE),
    ]));

    let err = runner.run(Selection::Single(9)).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::IndexOutOfRange { index: 9, max: 1 }
    ));

    // Slot 0 is not addressable directly either.
    let err = runner.run(Selection::Single(0)).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::IndexOutOfRange { index: 0, max: 1 }
    ));
}

// Runs the real suite end to end; takes a dozen seconds of wall time
// because of the scenarios' deliberate delays.
#[test]
fn standard_batch_covers_every_non_excluded_scenario() {
    caliper_core::logging::init_harness_logging();
    let runner = Runner::new(Registry::standard());
    let summary = runner.run(Selection::DefaultBatch).unwrap();

    let expected: Vec<usize> = (1..39).filter(|i| ![33, 34, 35].contains(i)).collect();
    assert_eq!(summary.indices(), expected);
    assert!(summary.total_elapsed() > std::time::Duration::ZERO);
}
